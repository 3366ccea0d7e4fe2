//! Seams the host implements: the network and the page.

use crate::error::{ClientError, Result};
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
///
/// Non-2xx statuses are returned as data; only failures that produce no
/// response at all should be reported as `ClientError::Transport`.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse>;
}

impl<F> Transport for F
where
    F: FnMut(HttpRequest) -> Result<HttpResponse>,
{
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse> {
        self(request)
    }
}

/// The parts of the page the client drives.
pub trait View {
    /// Replace the whole table container with `markup`.
    fn replace_table(&mut self, markup: String) -> Result<()>;

    fn set_input_enabled(&mut self, enabled: bool);

    fn clear_input(&mut self);

    /// Make a failed operation visible to the user.
    fn show_error(&mut self, error: &ClientError);

    fn clear_error(&mut self);
}
