use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: i64,
}
