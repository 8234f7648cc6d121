use crate::{DbError, ModelRepository, Result as DbErrorResult};

use turbo_core::{BroadcastableModel, Comment};

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct CommentRepository {
    pool: SqlitePool,
}

impl CommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_post(&self, post_id: i64) -> DbErrorResult<Vec<Comment>> {
        let rows = sqlx::query(
            r#"
              SELECT id, post_id, author, body, created_at, updated_at
              FROM blog_comments
              WHERE post_id = ?
              ORDER BY created_at ASC, id ASC
              "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    fn from_row(row: &SqliteRow) -> DbErrorResult<Comment> {
        Ok(Comment {
            id: Some(row.try_get("id")?),
            post_id: row.try_get("post_id")?,
            author: row.try_get("author")?,
            body: row.try_get("body")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn require_pk(comment: &Comment) -> DbErrorResult<i64> {
        comment
            .id
            .ok_or_else(|| DbError::not_persisted(Comment::META.label()))
    }
}

#[async_trait]
impl ModelRepository<Comment> for CommentRepository {
    async fn insert(&self, comment: &mut Comment) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
              INSERT INTO blog_comments (post_id, author, body, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(comment.post_id)
        .bind(&comment.author)
        .bind(&comment.body)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await?;

        comment.id = Some(result.last_insert_rowid());
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> DbErrorResult<()> {
        let id = Self::require_pk(comment)?;

        let result = sqlx::query(
            r#"
              UPDATE blog_comments
              SET author = ?, body = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&comment.author)
        .bind(&comment.body)
        .bind(comment.updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Comment::META.label(), id));
        }
        Ok(())
    }

    async fn delete(&self, comment: &Comment) -> DbErrorResult<()> {
        let id = Self::require_pk(comment)?;

        let result = sqlx::query("DELETE FROM blog_comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Comment::META.label(), id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Comment>> {
        let row = sqlx::query(
            r#"
              SELECT id, post_id, author, body, created_at, updated_at
              FROM blog_comments
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }
}
