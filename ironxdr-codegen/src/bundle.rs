//! Static bundle installation.
//!
//! The generated module imports runtime support (codec trait, streams,
//! compound types) that this engine does not generate. Those sources ship
//! embedded in the selected backend profile and are copied verbatim into the
//! output tree.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CodegenError;
use crate::profile::BackendProfile;

/// Copies the profile's static support files under `output_path`.
///
/// Each destination's parent directory is created once; existing files are
/// overwritten, so repeated runs are safe without explicit cleanup.
///
/// # Errors
/// Returns IO errors from directory creation or file writes, propagated
/// verbatim.
pub fn install_bundle(profile: BackendProfile, output_path: &Path) -> Result<(), CodegenError> {
    let mut created: HashSet<PathBuf> = HashSet::new();

    for file in profile.bundle() {
        let destination = output_path.join(file.path);

        if let Some(parent) = destination.parent() {
            if created.insert(parent.to_path_buf()) {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&destination, file.contents)?;
        debug!(path = %destination.display(), "installed bundle file");
    }

    Ok(())
}
