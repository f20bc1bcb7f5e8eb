/**
 * Blog Handler Types
 *
 * Request and response types for the post endpoints. The update request
 * is its own type with exactly the mutable field set (id, title,
 * content); it does not reuse the creation schema.
 */

use serde::{Deserialize, Serialize};
use crate::blog::posts::PostWithAuthor;

/// Create-post request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub published: bool,
}

/// Partial-update request: only title and content are mutable
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdatePostRequest {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Create-post acknowledgement
#[derive(Serialize, Deserialize, Debug)]
pub struct CreatePostResponse {
    pub message: String,
    #[serde(rename = "postId")]
    pub post_id: i64,
}

/// Update acknowledgement
#[derive(Serialize, Deserialize, Debug)]
pub struct UpdatePostResponse {
    pub id: i64,
}

/// Author projection: display name only
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthorResponse {
    pub name: String,
}

/// Post projection returned by the read endpoints
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub author: AuthorResponse,
}

/// List response, wrapping the projection under `blogs`
#[derive(Serialize, Deserialize, Debug)]
pub struct PostListResponse {
    pub blogs: Vec<PostResponse>,
}

impl From<PostWithAuthor> for PostResponse {
    fn from(post: PostWithAuthor) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            published: post.published,
            author: AuthorResponse {
                name: post.author_name,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_post_response_nests_author_name() {
        let response = PostResponse::from(PostWithAuthor {
            id: 1,
            title: "T".to_string(),
            content: "C".to_string(),
            published: true,
            author_name: "A".to_string(),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["author"]["name"], "A");
        assert!(json["author"].get("email").is_none());
    }

    #[test]
    fn test_update_request_rejects_published_only_payloads() {
        // The partial-update schema has no `published` field and
        // requires the id.
        let result =
            serde_json::from_str::<UpdatePostRequest>(r#"{"title":"T","content":"C"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_response_uses_camel_case_post_id() {
        let response = CreatePostResponse {
            message: "ok".to_string(),
            post_id: 5,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["postId"], 5);
    }
}
