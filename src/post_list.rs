use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;

use walkdir::WalkDir;

/// Post source files under `root_dir`, at any depth.
pub struct PostList {
    pub root_dir: PathBuf,
    /// The blog index body lives next to the posts and is never a post itself.
    pub index_file: String,
}

impl PostList {
    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        for entry in WalkDir::new(&self.root_dir).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name() == OsStr::new(&self.index_file) {
                continue;
            }
            posts.push(entry.into_path());
        }
        Ok(posts)
    }
}
