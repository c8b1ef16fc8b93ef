use crate::db::models::Post;
use crate::db::schema::SQLITE_INIT;
use crate::error::BlogError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool on `database_url`, creating the file if needed, and make sure
/// the `posts` table exists.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PostsStorage, BlogError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(connect_opts)
        .await?;
    let storage = PostsStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}

#[derive(Clone)]
pub struct PostsStorage {
    pool: SqlitePool,
}

impl PostsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), BlogError> {
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// All posts in insertion order.
    pub async fn list_posts(&self) -> Result<Vec<Post>, BlogError> {
        let posts = sqlx::query_as::<_, Post>("SELECT id, title, content FROM posts ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    pub async fn get_post(&self, id: i64) -> Result<Option<Post>, BlogError> {
        let post =
            sqlx::query_as::<_, Post>("SELECT id, title, content FROM posts WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(post)
    }

    /// Insert a post and return it with the id SQLite assigned.
    pub async fn create_post(&self, title: &str, content: &str) -> Result<Post, BlogError> {
        let post = sqlx::query_as::<_, Post>(
            "INSERT INTO posts (title, content) VALUES (?, ?) RETURNING id, title, content",
        )
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;
        debug!(id = post.id, "post inserted");
        Ok(post)
    }

    /// Overwrite title and content. Returns `false` if no row has this id.
    pub async fn update_post(&self, id: i64, title: &str, content: &str) -> Result<bool, BlogError> {
        let mut tx = self.pool.begin().await?;
        let affected = sqlx::query("UPDATE posts SET title = ?, content = ? WHERE id = ?")
            .bind(title)
            .bind(content)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if affected == 0 {
            return Ok(false);
        }
        tx.commit().await?;
        Ok(true)
    }

    /// Remove a post. Returns `false` if no row has this id.
    pub async fn delete_post(&self, id: i64) -> Result<bool, BlogError> {
        let mut tx = self.pool.begin().await?;
        let affected = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if affected == 0 {
            return Ok(false);
        }
        tx.commit().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A single long-lived connection keeps the in-memory database alive.
    async fn memory_storage() -> PostsStorage {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await
            .unwrap();
        let storage = PostsStorage::new(pool);
        storage.init_schema().await.unwrap();
        storage
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let storage = memory_storage().await;
        assert!(storage.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let storage = memory_storage().await;
        storage.create_post("T", "C").await.unwrap();
        storage.init_schema().await.unwrap();
        assert_eq!(storage.list_posts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_then_list() {
        let storage = memory_storage().await;
        let created = storage.create_post("T", "C").await.unwrap();

        let posts = storage.list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0], created);
        assert_eq!(posts[0].title, "T");
        assert_eq!(posts[0].content, "C");
        assert!(posts[0].id > 0);
    }

    #[tokio::test]
    async fn missing_ids_are_absent() {
        let storage = memory_storage().await;
        storage.create_post("T", "C").await.unwrap();

        for id in [0, -1, i64::MIN, 999_999, i64::MAX] {
            assert_eq!(storage.get_post(id).await.unwrap(), None, "id {id}");
        }
        assert!(!storage.update_post(42, "x", "y").await.unwrap());
        assert!(!storage.delete_post(42).await.unwrap());
    }

    #[tokio::test]
    async fn update_keeps_id() {
        let storage = memory_storage().await;
        let post = storage.create_post("T", "C").await.unwrap();

        assert!(storage.update_post(post.id, "T2", "C2").await.unwrap());
        let fetched = storage.get_post(post.id).await.unwrap().unwrap();
        assert_eq!(
            fetched,
            Post {
                id: post.id,
                title: "T2".to_string(),
                content: "C2".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let storage = memory_storage().await;
        let first = storage.create_post("a", "1").await.unwrap();
        let second = storage.create_post("b", "2").await.unwrap();

        assert!(storage.delete_post(second.id).await.unwrap());
        assert_eq!(storage.get_post(second.id).await.unwrap(), None);
        assert!(!storage.delete_post(second.id).await.unwrap());

        let third = storage.create_post("c", "3").await.unwrap();
        assert!(third.id > second.id);

        let ids: Vec<i64> = storage
            .list_posts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![first.id, third.id]);
    }

    #[tokio::test]
    async fn full_lifecycle_for_several_posts() {
        let storage = memory_storage().await;
        let mut seen = Vec::new();

        for n in 0..3 {
            let title = format!("title {n}");
            let content = format!("content {n}");
            let post = storage.create_post(&title, &content).await.unwrap();
            assert!(!seen.contains(&post.id));
            seen.push(post.id);

            let got = storage.get_post(post.id).await.unwrap().unwrap();
            assert_eq!((got.title.as_str(), got.content.as_str()), (title.as_str(), content.as_str()));

            let new_title = format!("{title} v2");
            let new_content = format!("{content} v2");
            assert!(storage.update_post(post.id, &new_title, &new_content).await.unwrap());
            let got = storage.get_post(post.id).await.unwrap().unwrap();
            assert_eq!(got.id, post.id);
            assert_eq!(got.title, new_title);
            assert_eq!(got.content, new_content);

            assert!(storage.delete_post(post.id).await.unwrap());
            assert_eq!(storage.get_post(post.id).await.unwrap(), None);
        }

        assert!(storage.list_posts().await.unwrap().is_empty());
    }
}
