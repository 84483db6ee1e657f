//! Error types for document generation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation request.
///
/// Template discovery and load failures are configuration errors; output
/// directory and write failures are persistence errors. Pricing-table shape
/// anomalies are absorbed by the pipeline with a logged warning and never
/// surface here.
#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("template file not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("failed to read template {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed template {}: {source}", .path.display())]
    TemplateParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode document {}: {source}", .path.display())]
    DocumentEncode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write document {}: {source}", .path.display())]
    DocumentWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
