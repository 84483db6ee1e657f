//! Template discovery across deployment environments
//!
//! The template must load from environments with varying working directories
//! (local runs, containers, cloud hosts). Discovery is an explicit ordered
//! candidate list tried in sequence: configured search roots first, then the
//! executable directory, working directory, filesystem root, relative lookups
//! at several depths, common deployment directories, and the user home. The
//! first existing candidate wins. When nothing exists the highest-priority
//! candidate is returned anyway, deferring the failure to the load step so
//! the caller sees a concrete missing path.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Relative lookups tried against the working directory, shallowest first.
const RELATIVE_DEPTHS: &[&str] = &[".", "..", "../.."];

/// Common deployment directories probed after the prioritized locations.
const DEPLOYMENT_DIRS: &[&str] = &["/var/app/current", "/app", "/home/app", "/usr/src/app"];

/// Find a readable template file, or the best candidate path when none exist.
pub fn locate_template(filename: &str, search_roots: &[PathBuf]) -> PathBuf {
    let candidates = candidate_paths(filename, search_roots);
    for candidate in &candidates {
        if candidate.exists() {
            info!("template found at {}", candidate.display());
            return candidate.clone();
        }
        debug!("template not at {}", candidate.display());
    }

    let fallback = candidates
        .into_iter()
        .next()
        .unwrap_or_else(|| PathBuf::from(filename));
    info!(
        "template not found in any search location, deferring to {}",
        fallback.display()
    );
    fallback
}

/// The prioritized candidate list, highest priority first.
pub(crate) fn candidate_paths(filename: &str, search_roots: &[PathBuf]) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    for root in search_roots {
        candidates.push(root.join(filename));
    }
    if let Some(dir) = exe_dir() {
        candidates.push(dir.join(filename));
    }
    if let Ok(cwd) = env::current_dir() {
        candidates.push(cwd.join(filename));
    }
    candidates.push(Path::new("/").join(filename));
    candidates.push(Path::new("/app").join(filename));
    for depth in RELATIVE_DEPTHS {
        candidates.push(Path::new(depth).join(filename));
    }
    for dir in DEPLOYMENT_DIRS {
        candidates.push(Path::new(dir).join(filename));
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(filename));
    }

    candidates
}

fn exe_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(Path::to_path_buf))
}
