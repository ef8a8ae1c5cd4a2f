use std::{fs, io};
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct ContentFile {
    pub file_name: String,
    pub file_path: PathBuf,
    pub raw_content: String,
}

impl ContentFile {
    pub fn from_file(file_path: PathBuf) -> io::Result<ContentFile> {
        let file_name = match file_path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name.to_string(),
            None => return Err(io::Error::new(ErrorKind::InvalidInput, format!("Invalid post file name {}", file_path.display()))),
        };

        let raw_content = match fs::read_to_string(&file_path) {
            Ok(content) => content,
            Err(e) => return Err(io::Error::new(e.kind(), format!("Error reading post {}: {}", file_path.display(), e))),
        };

        Ok(ContentFile {
            file_name,
            file_path,
            raw_content,
        })
    }

    pub fn from_string(file_name: &str, raw_content: &str) -> ContentFile {
        ContentFile {
            file_name: file_name.to_string(),
            file_path: PathBuf::from(file_name),
            raw_content: raw_content.to_string(),
        }
    }
}
