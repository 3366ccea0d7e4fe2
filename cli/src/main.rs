//! Terminal host for the to-do table.
//!
//! Renders the open to-do list into an HTML file (the table container) and
//! reads commands from stdin. See `help` at the prompt.

use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use todo_table_cli::repl;
use todo_table_cli::transport::UreqTransport;
use todo_table_cli::view::FileView;
use todo_table_core::{ClientConfig, TableRenderer, TodoClient};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "todo-table")]
#[command(version)]
#[command(about = "Keep an HTML table in sync with a to-do service")]
struct Cli {
    /// Service origin, e.g. http://127.0.0.1:3000
    #[arg(long, env = "TODO_ORIGIN")]
    origin: Option<String>,

    /// JSON configuration file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// File the rendered table is written to
    #[arg(long, default_value = "todos.html")]
    out: PathBuf,

    /// Handlebars template used instead of the built-in table
    #[arg(long)]
    template: Option<PathBuf>,

    /// Delay before the reload that follows an update (0 disables it)
    #[arg(long)]
    reload_delay_ms: Option<u64>,

    /// Do not disable the input while an add is in flight
    #[arg(long)]
    keep_input_enabled: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_json_file(path)?,
            None => ClientConfig::default(),
        };
        if let Some(origin) = &self.origin {
            config.origin = origin.clone();
        }
        if let Some(template) = &self.template {
            config.template_path = Some(template.clone());
        }
        if let Some(ms) = self.reload_delay_ms {
            config.reload_delay_ms = Some(ms);
        }
        if self.keep_input_enabled {
            config.disable_input_during_add = false;
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.client_config()?;
    let renderer = match &config.template_path {
        Some(path) => TableRenderer::from_file(path)?,
        None => TableRenderer::new()?,
    };
    let view = FileView::new(cli.out.clone());
    let mut client = TodoClient::new(config, UreqTransport::new(), renderer, view);
    info!(
        origin = %client.config().origin,
        reload_delay = ?client.config().reload_delay(),
        out = %cli.out.display(),
        "starting"
    );

    // A failed first load is already on screen; the prompt still starts so
    // the user can retry with `load`.
    if client.load().is_err() {
        info!("initial load failed, continuing");
    }

    let lines = repl::spawn_reader(BufReader::new(io::stdin()));
    repl::run(&mut client, lines, io::stdout()).context("prompt loop failed")?;
    if let Some(error) = client.view().last_error() {
        info!(%error, "last operation failed");
    }
    info!(path = %client.view().path().display(), "bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "todo-table",
            "--origin",
            "http://localhost:9000",
            "--reload-delay-ms",
            "0",
            "--keep-input-enabled",
        ]);
        let config = cli.client_config().unwrap();
        assert_eq!(config.origin, "http://localhost:9000");
        assert_eq!(config.reload_delay_ms, Some(0));
        assert_eq!(config.reload_delay(), None);
        assert!(!config.disable_input_during_add);
    }

    #[test]
    fn config_file_is_read_then_overridden() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.json");
        std::fs::write(&path, r#"{"origin":"http://from-file","reload_delay_ms":500}"#).unwrap();

        let cli = Cli::parse_from([
            "todo-table",
            "--config",
            path.to_str().unwrap(),
            "--reload-delay-ms",
            "1500",
        ]);
        let config = cli.client_config().unwrap();
        assert_eq!(config.origin, "http://from-file");
        assert_eq!(config.reload_delay_ms, Some(1500));
        assert!(config.disable_input_during_add);
    }
}
