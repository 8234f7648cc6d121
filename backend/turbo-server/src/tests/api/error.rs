use crate::ApiError;

use turbo_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("Post 3 not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Post 3 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("title is required", "title")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "boom".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_db_not_found_maps_to_not_found() {
    let error = ApiError::from(DbError::not_found("blog.comment", 7));

    assert!(matches!(error, ApiError::NotFound { ref message, .. } if message == "blog.comment 7 not found"));
}

#[test]
fn test_db_not_persisted_maps_to_bad_request() {
    let error = ApiError::from(DbError::not_persisted("blog.post"));

    assert!(matches!(error, ApiError::BadRequest { .. }));
}

#[test]
fn test_db_row_not_found_maps_to_not_found() {
    let error = ApiError::from(DbError::from(sqlx::Error::RowNotFound));

    assert!(matches!(error, ApiError::NotFound { .. }));
}

#[test]
fn test_other_db_errors_hide_details() {
    let error = ApiError::from(DbError::from(sqlx::Error::PoolClosed));

    assert!(matches!(
        error,
        ApiError::Internal { ref message, .. } if message == "Database operation failed"
    ));
}
