//! Generated-document persistence and naming
//!
//! Output files are named from the sanitized client name plus a
//! second-precision timestamp, which doubles as the collision guard for
//! concurrent requests. The day-precision variant is the name suggested to
//! delivery layers; the fully-qualified save path is authoritative.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use crate::document::{io, TemplateDocument};
use crate::error::AssemblerError;

/// A finished generation: the authoritative save path plus the suggested
/// download name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub path: PathBuf,
    pub download_name: String,
}

impl AsRef<Path> for GeneratedDocument {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Spaces in the client name become underscores in filenames.
pub(crate) fn sanitize_client_name(name: &str) -> String {
    name.replace(' ', "_")
}

/// `MSA_<Client_Name>_<YYYYMMDD_HHMMSS>.json`
pub(crate) fn output_file_name(client_name: &str, now: DateTime<Local>) -> String {
    format!(
        "MSA_{}_{}.json",
        sanitize_client_name(client_name),
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Day-precision variant used as the suggested download name.
pub(crate) fn download_file_name(client_name: &str, now: DateTime<Local>) -> String {
    format!(
        "MSA_{}_{}.json",
        sanitize_client_name(client_name),
        now.format("%Y%m%d")
    )
}

/// Write the mutated tree under the output directory (created if absent) and
/// derive the document's names.
pub(crate) fn save_generated(
    document: &TemplateDocument,
    output_dir: &Path,
    client_name: &str,
    now: DateTime<Local>,
) -> Result<GeneratedDocument, AssemblerError> {
    fs::create_dir_all(output_dir).map_err(|source| AssemblerError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(output_file_name(client_name, now));
    io::save_document(document, &path)?;
    info!("MSA document generated: {}", path.display());

    Ok(GeneratedDocument {
        path,
        download_name: download_file_name(client_name, now),
    })
}
