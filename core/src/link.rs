//! `tryLink`: turn https URLs into clickable links inside table cells.
//!
//! The helper never interprets its input as markup. A value is wrapped only
//! when it is a string that parses as an absolute URL with scheme `https`;
//! everything else goes back to the template engine, which escapes it.

use handlebars::{
    html_escape, Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};
use serde_json::Value;
use url::Url;

/// Name the helper is registered under in templates.
pub const TRY_LINK_HELPER: &str = "tryLink";

/// Result of [`try_link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Linked<'a> {
    /// Anchor markup, safe to emit unescaped.
    Link(String),
    /// The input value, untouched.
    Raw(&'a Value),
}

pub fn try_link(value: &Value) -> Linked<'_> {
    let Value::String(text) = value else {
        return Linked::Raw(value);
    };
    if text.is_empty() {
        return Linked::Raw(value);
    }
    match Url::parse(text) {
        Ok(url) if url.scheme() == "https" => {
            let escaped = html_escape(text);
            Linked::Link(format!(
                r#"<a href="{escaped}" target="_blank">{escaped}</a>"#
            ))
        }
        _ => Linked::Raw(value),
    }
}

/// Plain-text rendering of a value the way templates print it.
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Template helper wrapper around [`try_link`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TryLinkHelper;

impl HelperDef for TryLinkHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let value = h.param(0).map(|p| p.value()).unwrap_or(&Value::Null);
        let rendered = match try_link(value) {
            Linked::Link(markup) => markup,
            Linked::Raw(raw) => html_escape(&display_text(raw)),
        };
        out.write(&rendered)?;
        Ok(())
    }
}
