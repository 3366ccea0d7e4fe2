//! Stateless HTTP request builder and response parser for the to-do service.
//!
//! # Design
//! `TodoApi` holds only the service origin and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The host executes the actual round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, JSON_CONTENT_TYPE};
use crate::types::{TodoDraft, TodoId, TodoItem};

/// Request builder / response parser bound to one service origin.
#[derive(Debug, Clone)]
pub struct TodoApi {
    origin: String,
}

impl TodoApi {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// `GET /todos/open`: the service filters out done items.
    pub fn build_list_open(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("{}/todos/open", self.origin))
    }

    pub fn build_create(&self, draft: &TodoDraft) -> Result<HttpRequest> {
        self.with_json(HttpMethod::Post, format!("{}/todos", self.origin), draft)
    }

    pub fn build_update(&self, id: TodoId, draft: &TodoDraft) -> Result<HttpRequest> {
        self.with_json(HttpMethod::Put, format!("{}/todos/{id}", self.origin), draft)
    }

    pub fn build_delete(&self, id: TodoId) -> HttpRequest {
        self.bare(HttpMethod::Delete, format!("{}/todos/{id}", self.origin))
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<TodoItem>> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// The created item is the canonical copy, including its assigned id.
    pub fn parse_create(&self, response: HttpResponse) -> Result<TodoItem> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// Only the status matters; the body is ignored.
    pub fn parse_update(&self, response: HttpResponse) -> Result<()> {
        check_status(&response)
    }

    /// Only the status matters; the body is ignored.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<()> {
        check_status(&response)
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(
        &self,
        method: HttpMethod,
        path: String,
        draft: &TodoDraft,
    ) -> Result<HttpRequest> {
        let body =
            serde_json::to_string(draft).map_err(|e| ClientError::Serialization(e.to_string()))?;
        let (name, value) = JSON_CONTENT_TYPE;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![(name.to_string(), value.to_string())],
            body: Some(body),
        })
    }
}

/// Map non-success status codes to the appropriate `ClientError` variant.
fn check_status(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ClientError::NotFound);
    }
    Err(ClientError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| ClientError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn api() -> TodoApi {
        TodoApi::new("http://localhost:3000")
    }

    #[test]
    fn build_list_open_targets_open_collection() {
        let req = api().build_list_open();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos/open");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_sends_text_and_done_false() {
        let req = api().build_create(&TodoDraft::open("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"text": "Buy milk", "done": false}));
    }

    #[test]
    fn build_update_sends_full_body() {
        let draft = TodoDraft {
            text: "Walk dog".to_string(),
            done: true,
        };
        let req = api().build_update(Uuid::nil(), &draft).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(
            req.path,
            "http://localhost:3000/todos/00000000-0000-0000-0000-000000000000"
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["text"], "Walk dog");
        assert_eq!(body["done"], true);
    }

    #[test]
    fn build_delete_has_no_body_or_headers() {
        let req = api().build_delete(Uuid::nil());
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let api = TodoApi::new("http://localhost:3000/");
        assert_eq!(api.build_list_open().path, "http://localhost:3000/todos/open");
    }

    #[test]
    fn parse_list_success() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":"00000000-0000-0000-0000-000000000001","text":"Test","done":false}]"#,
        );
        let todos = api().parse_list(response).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "Test");
    }

    #[test]
    fn parse_list_bad_json() {
        let err = api().parse_list(HttpResponse::new(200, "not json")).unwrap_err();
        assert!(matches!(err, ClientError::Deserialization(_)));
    }

    #[test]
    fn parse_create_accepts_any_2xx() {
        let body = r#"{"id":"00000000-0000-0000-0000-000000000001","text":"New","done":false}"#;
        assert_eq!(api().parse_create(HttpResponse::new(201, body)).unwrap().text, "New");
        assert_eq!(api().parse_create(HttpResponse::new(200, body)).unwrap().text, "New");
    }

    #[test]
    fn parse_create_wrong_status() {
        let err = api()
            .parse_create(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ClientError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_update_ignores_body() {
        assert!(api().parse_update(HttpResponse::new(200, "garbage")).is_ok());
    }

    #[test]
    fn parse_delete_not_found() {
        let err = api().parse_delete(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ClientError::NotFound));
    }

    #[test]
    fn parse_delete_null_body() {
        assert!(api().parse_delete(HttpResponse::new(200, "null")).is_ok());
    }
}
