//! Assembler configuration
//!
//! Everything the pipeline needs from its environment is passed in here at
//! construction time: template filename, output directory, and any extra
//! template search roots. There is no process-global mutable state.

use std::path::PathBuf;

/// Fixed name of the template file looked up across the search path.
pub const DEFAULT_TEMPLATE_FILENAME: &str = "msa_template.json";

/// Directory generated documents are written under.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerConfig {
    pub template_filename: String,
    pub output_dir: PathBuf,
    /// Directories probed for the template before the built-in candidates.
    pub search_roots: Vec<PathBuf>,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            template_filename: DEFAULT_TEMPLATE_FILENAME.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            search_roots: Vec::new(),
        }
    }
}

impl AssemblerConfig {
    /// Override the template filename.
    pub fn with_template_filename(mut self, filename: impl Into<String>) -> Self {
        self.template_filename = filename.into();
        self
    }

    /// Override the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Add a directory to probe before the built-in candidates.
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_roots.push(root.into());
        self
    }
}
