/**
 * Post Model and Database Operations
 *
 * This module handles blog post data and the store operations used by
 * the blog handlers. Read paths return a fixed projection - id, title,
 * content, published, and the author's display name - never the
 * author's email or credential digest.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Post row as stored
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    /// Unique post id (store-assigned)
    pub id: i64,
    pub title: String,
    pub content: String,
    pub published: bool,
    /// Owning user id, immutable after creation
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Read projection: a post joined with its author's display name
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostWithAuthor {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub author_name: String,
}

/// Create a new post owned by `author_id`
pub async fn create_post(
    pool: &PgPool,
    title: &str,
    content: &str,
    published: bool,
    author_id: i64,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, content, published, author_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, content, published, author_id, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(published)
    .bind(author_id)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// List all posts with the author-name projection
///
/// Unbounded by design parity with the original service; ordering is by
/// id so output is stable across requests.
pub async fn list_posts(pool: &PgPool) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    let posts = sqlx::query_as::<_, PostWithAuthor>(
        r#"
        SELECT p.id, p.title, p.content, p.published, u.name AS author_name
        FROM posts p
        JOIN users u ON u.id = p.author_id
        ORDER BY p.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Get a single post by id with the author-name projection
pub async fn find_post_by_id(
    pool: &PgPool,
    id: i64,
) -> Result<Option<PostWithAuthor>, sqlx::Error> {
    let post = sqlx::query_as::<_, PostWithAuthor>(
        r#"
        SELECT p.id, p.title, p.content, p.published, u.name AS author_name
        FROM posts p
        JOIN users u ON u.id = p.author_id
        WHERE p.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Get the owning user id of a post
///
/// Used by the update handler for the ownership check before any write.
pub async fn find_post_author(pool: &PgPool, id: i64) -> Result<Option<i64>, sqlx::Error> {
    let author_id: Option<(i64,)> = sqlx::query_as(
        r#"
        SELECT author_id
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(author_id.map(|row| row.0))
}

/// Replace a post's title and content
///
/// Returns the updated id, or `None` when no row matched.
pub async fn update_post(
    pool: &PgPool,
    id: i64,
    title: &str,
    content: &str,
) -> Result<Option<i64>, sqlx::Error> {
    let updated: Option<(i64,)> = sqlx::query_as(
        r#"
        UPDATE posts
        SET title = $2, content = $3, updated_at = now()
        WHERE id = $1
        RETURNING id
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(content)
    .fetch_optional(pool)
    .await?;

    Ok(updated.map(|row| row.0))
}
