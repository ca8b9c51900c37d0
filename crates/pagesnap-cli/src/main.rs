// pagesnap CLI entry point
//
// All the CLI does is parse the two positional arguments, run the capture,
// and translate the outcome into process conventions: one success line on
// stdout and exit 0, or a diagnostic on stderr and exit 1. The capture
// itself never terminates the process.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Capture a full-page screenshot of a web page.
#[derive(Debug, Parser)]
#[command(name = "pagesnap", version, about)]
struct Cli {
    /// URL of the page to capture
    url: String,

    /// File the PNG screenshot is written to (its parent directory must exist)
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only the success line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    pagesnap::capture(&cli.url, &cli.output).await?;
    println!("Screenshot saved to {}", cli.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_url_and_output() {
        let cli = Cli::parse_from(["pagesnap", "https://example.com", "/tmp/out.png"]);
        assert_eq!(cli.url, "https://example.com");
        assert_eq!(cli.output, PathBuf::from("/tmp/out.png"));
    }

    #[test]
    fn test_cli_requires_both_arguments() {
        assert!(Cli::try_parse_from(["pagesnap", "https://example.com"]).is_err());
        assert!(Cli::try_parse_from(["pagesnap"]).is_err());
    }
}
