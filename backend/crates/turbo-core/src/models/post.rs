use crate::{BroadcastableModel, ModelMeta, StreamAction};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<i64>,

    pub title: String,
    pub body: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(title: String, body: String) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            title,
            body,
            created_at: now,
            updated_at: now,
        }
    }
}

impl BroadcastableModel for Post {
    const META: ModelMeta = ModelMeta::new("blog", "post", "post", "posts");

    // Newest posts go to the top of the list
    const INSERTS_BY: StreamAction = StreamAction::Prepend;

    fn pk(&self) -> Option<i64> {
        self.id
    }
}
