use std::io;
use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;

/// Unpacks the starter site embedded at build time.
pub fn decompress_files(output: &Path) -> io::Result<()> {
    let tar_gz = include_bytes!(concat!(env!("OUT_DIR"), "/res.tar.gz"));
    let tar = GzDecoder::new(tar_gz.as_ref());
    let mut archive = Archive::new(tar);
    archive.unpack(output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_uncompress() {
        let tmp = TempDir::new().unwrap();
        decompress_files(tmp.path()).unwrap();

        assert!(tmp.path().join("sitewright.toml").is_file());
        assert!(tmp.path().join("components").join("head.html").is_file());
        assert!(tmp.path().join("pages").join("blog").join("index.html").is_file());
    }
}
