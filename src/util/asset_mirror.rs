use std::path::{Path, PathBuf};
use std::{fs, io};

use spdlog::{debug, warn};
use walkdir::WalkDir;

/// Copies the `src` tree into `dst`, keeping directory layout and permissions.
/// Returns the number of files copied.
pub fn mirror_dir(src: &Path, dst: &Path) -> io::Result<usize> {
    let mut file_count = 0;
    let mut dirs: Vec<(PathBuf, fs::Permissions)> = vec![];

    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let relative = match entry.path().strip_prefix(src) {
            Ok(rel) => rel,
            Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e)),
        };
        let out_path = dst.join(relative);
        let metadata = entry.metadata()?;

        if metadata.is_dir() {
            fs::create_dir_all(&out_path)?;
            dirs.push((out_path, metadata.permissions()));
            continue;
        }

        let copied = fs::copy(entry.path(), &out_path)?;
        if copied != metadata.len() {
            warn!("Copy may be incomplete: {}({}) -> {}({})", entry.path().display(), metadata.len(), out_path.display(), copied);
        }
        debug!("Copied {}", out_path.display());
        file_count += 1;
    }

    // Children first, so a read-only directory does not block its own content
    for (dir, permissions) in dirs.into_iter().rev() {
        fs::set_permissions(&dir, permissions)?;
    }

    Ok(file_count)
}
