//! Resolve paths against the quiz route table from the command line.
//!
//! Prints one JSON object per input path, useful for checking what the
//! client would render for a given URL without starting it.

use clap::Parser;
use routes::app;
use routes::table::TableError;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("route table failed to build: {0}")]
    Table(#[from] TableError),
    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "resolve", about = "Resolve paths against the quiz client route table")]
struct Cli {
    /// Paths to resolve, e.g. `/answers/3`.
    #[arg(required = true)]
    paths: Vec<String>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let config = app::router()?;

    for path in &cli.paths {
        let line = match config.table().resolve(path) {
            Some(found) => serde_json::json!({
                "path": path,
                "route": found.name(),
                "view": format!("{:?}", found.view()),
                "params": found.params(),
                "props": found.view_props(),
            }),
            None => serde_json::json!({
                "path": path,
                "route": serde_json::Value::Null,
            }),
        };
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}
