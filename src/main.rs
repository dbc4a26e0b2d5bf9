//! # Zebrakit CLI
//!
//! Command-line interface for building and previewing ZPL labels.
//!
//! ## Usage
//!
//! ```bash
//! # List available sample labels
//! zebrakit list
//!
//! # Print the markup of a sample label, one fragment per line
//! zebrakit print shipping --newlines
//!
//! # Print the markup of a label defined in JSON
//! zebrakit print --json label.json
//!
//! # Render a PNG preview through Labelary
//! zebrakit render shipping --format png --out ./out
//!
//! # Render a PDF, failing early if the content overflows the label
//! zebrakit render shipping --format pdf --check-bounds
//! ```

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use zebrakit::{
    Label, ZebraError,
    render::{LabelaryClient, OutputFormat, save_artifact},
    sample,
};

/// Zebrakit - ZPL label builder
#[derive(Parser, Debug)]
#[command(name = "zebrakit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where a label comes from.
#[derive(Args, Debug)]
struct LabelSource {
    /// Sample label name (see `zebrakit list`)
    #[arg(required_unless_present = "json", conflicts_with = "json")]
    name: Option<String>,

    /// Read the label definition from a JSON file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available sample labels
    List,

    /// Print a label's markup to stdout
    Print {
        #[command(flatten)]
        source: LabelSource,

        /// Put every fragment on its own line
        #[arg(long)]
        newlines: bool,

        /// Omit the ^XA / ^XZ wrapper
        #[arg(long)]
        no_wrap: bool,
    },

    /// Render a label to PDF or PNG through Labelary
    Render {
        #[command(flatten)]
        source: LabelSource,

        /// Output format (pdf or png)
        #[arg(long, default_value = "png")]
        format: String,

        /// Fail before rendering if content exceeds the label size
        #[arg(long)]
        check_bounds: bool,

        /// Directory the rendered file is written to
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: PathBuf,

        /// Labelary API base URL
        #[arg(
            long,
            env = "ZEBRAKIT_LABELARY_URL",
            default_value = LabelaryClient::DEFAULT_BASE_URL
        )]
        labelary_url: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zebrakit=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ZebraError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            println!("Available labels:");
            for name in sample::list_labels() {
                println!("  {}", name);
            }
        }

        Commands::Print {
            source,
            newlines,
            no_wrap,
        } => {
            let label = load_label(&source)?;
            println!("{}", label.serialize(!no_wrap, newlines));
        }

        Commands::Render {
            source,
            format,
            check_bounds,
            out,
            labelary_url,
        } => {
            // Reject the format before touching the label or the network
            let format: OutputFormat = format.parse()?;
            let label = load_label(&source)?;
            let client = LabelaryClient::with_base_url(labelary_url)?;

            let bytes = label.render_with(&client, format, check_bounds).await?;
            let path = save_artifact(&bytes, format, &out)?;
            tracing::info!(path = %path.display(), "saved {} label", format);
            println!("Saved to {}", path.display());
        }
    }

    Ok(())
}

/// Resolve a label from a sample name or a JSON file.
fn load_label(source: &LabelSource) -> Result<Label, ZebraError> {
    if let Some(path) = &source.json {
        return read_json_label(path);
    }

    let name = source.name.as_deref().unwrap_or_default();
    sample::by_name(name).ok_or_else(|| ZebraError::UnknownLabel(name.to_string()))
}

fn read_json_label(path: &Path) -> Result<Label, ZebraError> {
    let json = fs::read_to_string(path)?;
    let label = Label::from_json(&json)?;
    tracing::debug!(path = %path.display(), fields = label.len(), "loaded label definition");
    Ok(label)
}
