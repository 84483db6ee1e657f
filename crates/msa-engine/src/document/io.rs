//! Document tree persistence format
//!
//! The template and generated documents are serde-encoded JSON trees. Load
//! and save both carry the offending path in their errors so discovery
//! failures surface as a concrete missing file rather than a silent default.

use std::fs;
use std::path::Path;

use crate::document::TemplateDocument;
use crate::error::AssemblerError;

/// Load a template document tree from disk.
pub fn load_template(path: &Path) -> Result<TemplateDocument, AssemblerError> {
    if !path.exists() {
        return Err(AssemblerError::TemplateNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|source| AssemblerError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| AssemblerError::TemplateParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a document tree to disk.
pub fn save_document(document: &TemplateDocument, path: &Path) -> Result<(), AssemblerError> {
    let bytes =
        serde_json::to_vec_pretty(document).map_err(|source| AssemblerError::DocumentEncode {
            path: path.to_path_buf(),
            source,
        })?;
    fs::write(path, bytes).map_err(|source| AssemblerError::DocumentWrite {
        path: path.to_path_buf(),
        source,
    })
}
