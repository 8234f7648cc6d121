use crate::{DbError, ModelRepository, Result as DbErrorResult};

use turbo_core::{BroadcastableModel, Post};

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> DbErrorResult<Vec<Post>> {
        let rows = sqlx::query(
            r#"
              SELECT id, title, body, created_at, updated_at
              FROM blog_posts
              ORDER BY created_at DESC, id DESC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    fn from_row(row: &SqliteRow) -> DbErrorResult<Post> {
        Ok(Post {
            id: Some(row.try_get("id")?),
            title: row.try_get("title")?,
            body: row.try_get("body")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn require_pk(post: &Post) -> DbErrorResult<i64> {
        post.id.ok_or_else(|| DbError::not_persisted(Post::META.label()))
    }
}

#[async_trait]
impl ModelRepository<Post> for PostRepository {
    async fn insert(&self, post: &mut Post) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
              INSERT INTO blog_posts (title, body, created_at, updated_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(&post.title)
        .bind(&post.body)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        post.id = Some(result.last_insert_rowid());
        Ok(())
    }

    async fn update(&self, post: &Post) -> DbErrorResult<()> {
        let id = Self::require_pk(post)?;

        let result = sqlx::query(
            r#"
              UPDATE blog_posts
              SET title = ?, body = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&post.title)
        .bind(&post.body)
        .bind(post.updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Post::META.label(), id));
        }
        Ok(())
    }

    async fn delete(&self, post: &Post) -> DbErrorResult<()> {
        let id = Self::require_pk(post)?;

        let result = sqlx::query("DELETE FROM blog_posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Post::META.label(), id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Post>> {
        let row = sqlx::query(
            r#"
              SELECT id, title, body, created_at, updated_at
              FROM blog_posts
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }
}
