use crate::core::errors::{Error, Result};
use crate::models::link::Link;
use crate::services::fs::listing::{list_subdirs, EntryOrder};
use crate::services::html::{render_document, render_fragment, Escaping};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// URL prefix used when none is configured.
pub const DEFAULT_URL_PREFIX: &str = "https://rexrainbow.github.io/C2Demo/";
/// Output file name used when none is configured.
pub const DEFAULT_OUTPUT_NAME: &str = "index.html";

/// Describes one generation run.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Directory whose immediate subdirectories are indexed.
    pub root: PathBuf,
    /// Prepended as-is to each subdirectory name to form the link target.
    pub url_prefix: String,
    /// Output file; a relative name resolves inside `root`.
    pub output_name: PathBuf,
    pub order: EntryOrder,
    pub escaping: Escaping,
    /// When set, the lines are wrapped in a full HTML document using this
    /// title; otherwise the bare fragment is emitted.
    pub title: Option<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            output_name: PathBuf::from(DEFAULT_OUTPUT_NAME),
            order: EntryOrder::Name,
            escaping: Escaping::Html,
            title: None,
        }
    }
}

impl IndexConfig {
    /// Where the document lands: relative names inside the scanned
    /// directory, absolute paths as given.
    pub fn output_path(&self) -> PathBuf {
        if self.output_name.is_absolute() {
            self.output_name.clone()
        } else {
            self.root.join(&self.output_name)
        }
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub links: usize,
    pub output: PathBuf,
}

/// Builds the subdirectory index: one scan, one render, one write.
pub struct IndexBuilder {
    config: IndexConfig,
}

impl IndexBuilder {
    pub fn new(config: IndexConfig) -> IndexBuilder {
        IndexBuilder { config }
    }

    /// Renders the output document in memory without touching the
    /// filesystem beyond the scan.
    pub fn render(&self) -> Result<String> {
        Ok(self.build()?.0)
    }

    /// Scans, renders, and writes the document in one pass, replacing any
    /// previous output file. Nothing is written when the scan fails.
    pub fn generate(&self) -> Result<IndexSummary> {
        let (document, links) = self.build()?;
        let output = self.config.output_path();
        fs::write(&output, &document).map_err(|e| Error::write_index(&output, e))?;
        info!("wrote {} ({} links)", output.display(), links);
        Ok(IndexSummary { links, output })
    }

    fn build(&self) -> Result<(String, usize)> {
        let names = list_subdirs(&self.config.root, self.config.order)?;
        debug!(
            "{} qualifying subdirectories under {}",
            names.len(),
            self.config.root.display()
        );

        let links: Vec<Link> = names
            .iter()
            .map(|name| Link::from_name(&self.config.url_prefix, name))
            .collect();

        let document = match &self.config.title {
            Some(title) => render_document(title, &links, self.config.escaping),
            None => render_fragment(&links, self.config.escaping),
        };
        Ok((document, links.len()))
    }
}
