//! Table rendering.
//!
//! The whole list is rendered on every change; the host swaps the result
//! into its container in one piece.

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{ClientError, Result};
use crate::link::{TryLinkHelper, TRY_LINK_HELPER};
use crate::types::TodoItem;

const TABLE_TEMPLATE: &str = "table";
const DEFAULT_TABLE: &str = include_str!("../templates/table.hbs");

/// Maps the current list to markup.
pub trait Renderer {
    fn render(&self, todos: &[TodoItem]) -> Result<String>;
}

#[derive(Serialize)]
struct TableData<'a> {
    todos: &'a [TodoItem],
}

/// Handlebars-backed table renderer with the `tryLink` helper registered.
#[derive(Debug)]
pub struct TableRenderer {
    registry: Handlebars<'static>,
}

impl TableRenderer {
    /// Renderer using the built-in table template.
    pub fn new() -> Result<Self> {
        Self::from_template(DEFAULT_TABLE)
    }

    pub fn from_template(template: &str) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_helper(TRY_LINK_HELPER, Box::new(TryLinkHelper));
        registry
            .register_template_string(TABLE_TEMPLATE, template)
            .map_err(|e| ClientError::Render(e.to_string()))?;
        Ok(Self { registry })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let template = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("{}: {e}", path.display())))?;
        Self::from_template(&template)
    }
}

impl Renderer for TableRenderer {
    fn render(&self, todos: &[TodoItem]) -> Result<String> {
        self.registry
            .render(TABLE_TEMPLATE, &TableData { todos })
            .map_err(|e| ClientError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn item(n: u128, text: &str, done: bool) -> TodoItem {
        TodoItem {
            id: Uuid::from_u128(n),
            text: text.to_string(),
            done,
        }
    }

    #[test]
    fn rows_follow_list_order() {
        let renderer = TableRenderer::new().unwrap();
        let html = renderer
            .render(&[item(1, "first", false), item(2, "second", true)])
            .unwrap();
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("<tr data-id=").count(), 2);
        assert_eq!(html.matches(" checked").count(), 1);
    }

    #[test]
    fn text_is_escaped_and_links_are_wrapped() {
        let renderer = TableRenderer::new().unwrap();
        let html = renderer
            .render(&[
                item(1, "<script>alert(1)</script>", false),
                item(2, "https://example.com", false),
            ])
            .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"<a href="https://example.com" target="_blank">"#));
    }

    #[test]
    fn empty_list_renders_empty_body() {
        let html = TableRenderer::new().unwrap().render(&[]).unwrap();
        assert!(html.contains("<tbody>"));
        assert!(!html.contains("<tr data-id="));
    }

    #[test]
    fn custom_template_receives_todos() {
        let renderer =
            TableRenderer::from_template("{{#each todos}}[{{text}}]{{/each}}").unwrap();
        let html = renderer
            .render(&[item(1, "a", false), item(2, "b", false)])
            .unwrap();
        assert_eq!(html, "[a][b]");
    }

    #[test]
    fn broken_template_is_a_render_error() {
        let err = TableRenderer::from_template("{{#each todos}}").unwrap_err();
        assert!(matches!(err, ClientError::Render(_)));
    }
}
