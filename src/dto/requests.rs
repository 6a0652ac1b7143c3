use crate::{errors::ApiError, models::Post};
use serde::Deserialize;

/// Every field deserializes as `Option` so presence can be checked one field
/// at a time, in declared order. The first missing field is the one named in
/// the 400 response; axum's default `Json` rejection cannot promise that.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<String>,
}

impl CreatePostRequest {
    pub fn into_fields(self) -> Result<(String, String, String, String), ApiError> {
        let title = self.title.ok_or(ApiError::MissingField("title"))?;
        let content = self.content.ok_or(ApiError::MissingField("content"))?;
        let author = self.author.ok_or(ApiError::MissingField("author"))?;
        let publish_date = self
            .publish_date
            .ok_or(ApiError::MissingField("publishDate"))?;

        Ok((title, content, author, publish_date))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<String>,
}

impl UpdatePostRequest {
    /// The required-fields check runs before the id-match check; the first
    /// failing condition short-circuits, and nothing is mutated until both
    /// pass.
    pub fn into_post(self, path_id: &str) -> Result<Post, ApiError> {
        let id = self.id.ok_or(ApiError::MissingField("id"))?;
        let title = self.title.ok_or(ApiError::MissingField("title"))?;
        let content = self.content.ok_or(ApiError::MissingField("content"))?;
        let author = self.author.ok_or(ApiError::MissingField("author"))?;
        let publish_date = self
            .publish_date
            .ok_or(ApiError::MissingField("publishDate"))?;

        if path_id != id {
            return Err(ApiError::IdMismatch {
                path: path_id.to_string(),
                body: id,
            });
        }

        Ok(Post {
            id,
            title,
            content,
            author,
            publish_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_update(id: &str) -> UpdatePostRequest {
        UpdatePostRequest {
            id: Some(id.to_string()),
            title: Some("t".to_string()),
            content: Some("c".to_string()),
            author: Some("a".to_string()),
            publish_date: Some("2024-01-01".to_string()),
        }
    }

    #[test]
    fn create_names_first_missing_field_in_declared_order() {
        let payload = CreatePostRequest {
            title: None,
            content: None,
            author: Some("a".to_string()),
            publish_date: None,
        };

        // title comes before content and publishDate in the declared order
        assert_eq!(
            payload.into_fields().unwrap_err(),
            ApiError::MissingField("title")
        );
    }

    #[test]
    fn update_checks_presence_before_id_match() {
        let mut payload = full_update("2");
        payload.id = None;

        // Even though the body id would also mismatch, the missing field wins.
        assert_eq!(
            payload.into_post("1").unwrap_err(),
            ApiError::MissingField("id")
        );
    }

    #[test]
    fn update_rejects_mismatched_ids() {
        let err = full_update("2").into_post("1").unwrap_err();

        assert_eq!(
            err,
            ApiError::IdMismatch {
                path: "1".to_string(),
                body: "2".to_string(),
            }
        );
    }

    #[test]
    fn update_with_matching_id_yields_a_post() {
        let post = full_update("7").into_post("7").unwrap();

        assert_eq!(post.id, "7");
        assert_eq!(post.title, "t");
    }
}
