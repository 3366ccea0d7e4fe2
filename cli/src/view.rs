//! File-backed view: the container is a file that is rewritten in full on
//! every render, and errors go to stderr.

use std::path::{Path, PathBuf};

use todo_table_core::{ClientError, Result, View};
use tracing::{debug, trace};

pub struct FileView {
    path: PathBuf,
    last_error: Option<String>,
}

impl FileView {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            last_error: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl View for FileView {
    fn replace_table(&mut self, markup: String) -> Result<()> {
        // Write-then-rename so readers never see a half-written table.
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, markup)
            .and_then(|()| std::fs::rename(&tmp, &self.path))
            .map_err(|e| ClientError::View(format!("{}: {e}", self.path.display())))?;
        debug!(path = %self.path.display(), "table written");
        Ok(())
    }

    // The prompt is not read while a request is in flight, so there is
    // nothing to lock.
    fn set_input_enabled(&mut self, enabled: bool) {
        trace!(enabled, "input state");
    }

    fn clear_input(&mut self) {}

    fn show_error(&mut self, error: &ClientError) {
        eprintln!("error: {error}");
        self.last_error = Some(error.to_string());
    }

    fn clear_error(&mut self) {
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_table_overwrites_the_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.html");
        let mut view = FileView::new(path.clone());

        view.replace_table("<table>first</table>".to_string()).unwrap();
        view.replace_table("<table>second</table>".to_string()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<table>second</table>");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn missing_directory_is_a_view_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = FileView::new(dir.path().join("missing").join("todos.html"));
        let err = view.replace_table(String::new()).unwrap_err();
        assert!(matches!(err, ClientError::View(_)));
    }

    #[test]
    fn errors_are_remembered_until_cleared() {
        let mut view = FileView::new(PathBuf::from("unused.html"));
        view.show_error(&ClientError::NotFound);
        assert_eq!(view.last_error(), Some("resource not found"));
        view.clear_error();
        assert!(view.last_error().is_none());
    }
}
