use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dirindex::core::telemetry::logging::init_logging;
use dirindex::services::fs::listing::EntryOrder;
use dirindex::services::html::Escaping;
use dirindex::services::index::{
    IndexBuilder, IndexConfig, DEFAULT_OUTPUT_NAME, DEFAULT_URL_PREFIX,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dirindex",
    version,
    about = "Generate an HTML index linking each subdirectory of a directory"
)]
struct Cli {
    /// Directory to scan
    #[arg(long, value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// URL prefix prepended to each subdirectory name
    #[arg(long, value_name = "URL", default_value = DEFAULT_URL_PREFIX)]
    prefix: String,

    /// Output file; a relative name is created inside the scanned directory
    #[arg(long, value_name = "FILE", default_value = DEFAULT_OUTPUT_NAME)]
    out: PathBuf,

    /// Order of the generated lines
    #[arg(long, value_enum, value_name = "ORDER", default_value = "name")]
    order: OrderArg,

    /// Interpolate names into the markup verbatim, as the legacy generator did
    #[arg(long)]
    verbatim: bool,

    /// Wrap the lines in a complete HTML document with this title
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,

    /// Print the document to stdout instead of writing the output file
    #[arg(long, conflicts_with = "out")]
    stdout: bool,

    /// Only log warnings and errors
    #[arg(long)]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OrderArg {
    /// Sort subdirectory names (byte order)
    Name,
    /// Keep the raw directory-listing order
    Listing,
}

impl From<OrderArg> for EntryOrder {
    fn from(value: OrderArg) -> EntryOrder {
        match value {
            OrderArg::Name => EntryOrder::Name,
            OrderArg::Listing => EntryOrder::Listing,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.quiet { "warn" } else { "info" });

    let config = IndexConfig {
        root: cli.dir,
        url_prefix: cli.prefix,
        output_name: cli.out,
        order: cli.order.into(),
        escaping: if cli.verbatim {
            Escaping::Verbatim
        } else {
            Escaping::Html
        },
        title: cli.title,
    };

    let builder = IndexBuilder::new(config);
    if cli.stdout {
        let document = builder.render()?;
        std::io::stdout()
            .lock()
            .write_all(document.as_bytes())
            .context("failed to write document to stdout")?;
    } else {
        builder.generate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdout_rejects_an_explicit_out() {
        assert!(Cli::try_parse_from(["dirindex", "--out", "x.html", "--stdout"]).is_err());
        assert!(Cli::try_parse_from(["dirindex", "--stdout"]).is_ok());
        assert!(Cli::try_parse_from(["dirindex"]).is_ok());
    }
}
