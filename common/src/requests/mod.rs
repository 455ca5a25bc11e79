//! Wire shapes and paths of the two backend endpoints the uploader talks to.
//!
//! - `POST /api/files` takes a multipart body with a single `file` field.
//! - `GET /api/users?q=<query>` answers with `{ "data": [User, ...] }`.
//!
//! Either endpoint answers a failure with a JSON body carrying a `message`.

use serde::{Deserialize, Serialize};

use crate::model::user::User;

pub const FILES_PATH: &str = "/api/files";
pub const USERS_PATH: &str = "/api/users";
pub const SEARCH_PARAM: &str = "q";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
/// Successful body of the users endpoint.
pub struct UsersResponse {
    pub data: Vec<User>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
/// Failure body of either endpoint.
pub struct ErrorResponse {
    pub message: String,
}

/// Joins `base` and `path` with exactly one slash between them.
/// An empty base yields a same-origin relative path.
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_collapses_duplicate_slashes() {
        assert_eq!(
            endpoint("http://localhost:3000/", USERS_PATH),
            "http://localhost:3000/api/users"
        );
        assert_eq!(
            endpoint("http://localhost:3000", "api/files"),
            "http://localhost:3000/api/files"
        );
    }

    #[test]
    fn endpoint_with_empty_base_is_relative() {
        assert_eq!(endpoint("", FILES_PATH), "/api/files");
    }

    #[test]
    fn users_response_accepts_empty_list() {
        let body: UsersResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(body.data.is_empty());
    }
}
