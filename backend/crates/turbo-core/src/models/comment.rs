use crate::{BroadcastableModel, ModelMeta, Post, Relation, Target};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Option<i64>,
    pub post_id: i64,

    pub author: String,
    pub body: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: i64, author: String, body: String) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            post_id,
            author,
            body,
            created_at: now,
            updated_at: now,
        }
    }
}

impl BroadcastableModel for Comment {
    const META: ModelMeta = ModelMeta::new("blog", "comment", "comment", "comments");

    fn pk(&self) -> Option<i64> {
        self.id
    }

    fn broadcasts_to() -> Vec<Relation<Self>> {
        vec![Relation::field("post", |comment: &Comment| {
            Some(Target::model(Post::META, Some(comment.post_id)))
        })]
    }
}
