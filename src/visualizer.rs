//! Pipeline orchestration.
//!
//! Wires the phases together: load the two inputs, walk the tree, render
//! the document, write the output file. Each run is a pure function of the
//! inputs; re-running with the same files produces the same page.

use std::fs;

use log::debug;

use crate::cli::Config;
use crate::error::Error;
use crate::loader;
use crate::render::HtmlRenderer;
use crate::walker::{self, DEFAULT_PALETTE};

/// Main visualization driver
pub struct Visualizer {
    config: Config,
}

impl Visualizer {
    pub fn new(config: Config) -> Self {
        Visualizer { config }
    }

    /// Run the whole pipeline once.
    pub fn run(&self) -> Result<(), Error> {
        let inputs = loader::load(&self.config.tree_path, &self.config.source_path)?;

        let tree = walker::walk(&inputs.roots, inputs.source_bytes(), &DEFAULT_PALETTE);
        debug!(
            "display tree: {} records, {} highlights",
            tree.len(),
            tree.highlights().len()
        );

        let html = HtmlRenderer::new(&tree, &inputs.source_text)
            .with_title(&self.config.title)
            .render()?;

        fs::write(&self.config.output_path, html).map_err(|source| Error::Output {
            path: self.config.output_path.clone(),
            source,
        })?;
        debug!("wrote {}", self.config.output_path.display());

        Ok(())
    }
}
