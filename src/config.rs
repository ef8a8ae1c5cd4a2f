use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::view::page_context::CardDiv;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Paths {
    pub component_dir: PathBuf,
    pub page_dir: PathBuf,
    pub blog_dir: PathBuf,
    pub style_dir: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            component_dir: PathBuf::from("components"),
            page_dir: PathBuf::from("pages"),
            blog_dir: PathBuf::from("pages").join("blog"),
            style_dir: PathBuf::from("styles"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("output"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Defaults {
    /// File inside the blog directory holding the blog index body. Never treated as a post.
    pub index_file_name: String,
    pub blog_folder_name: String,
    pub style_folder_name: String,
    /// How many posts the site index shows as cards.
    pub recent_post_count: usize,
    pub overview_length: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            index_file_name: "index.html".to_string(),
            blog_folder_name: "blog".to_string(),
            style_folder_name: "styles".to_string(),
            recent_post_count: 5,
            overview_length: 100,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Styles {
    pub index: Vec<String>,
    pub blog_index: Vec<String>,
    pub blog_post: Vec<String>,
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for Styles {
    fn default() -> Self {
        Styles {
            index: to_strings(&["toplevel.css", "index.css", "footerHeader.css", "cardDiv.css"]),
            blog_index: to_strings(&["toplevel.css", "footerHeader.css", "blogIndex.css"]),
            blog_post: to_strings(&["toplevel.css", "footerHeader.css", "post.css"]),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Log {
    pub level: LogLevel,
    #[serde(default = "default_log_to_console")]
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

fn default_log_to_console() -> bool {
    true
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub defaults: Defaults,
    pub styles: Styles,
    pub log: Option<Log>,
    pub projects: Vec<CardDiv>,
    pub tools: Vec<CardDiv>,
}

impl Config {
    /// Default layout with every directory placed under `root`.
    pub fn with_root(root: &Path) -> Config {
        let mut cfg = Config::default();
        cfg.paths = cfg.paths.rebase(|p| root.join(p));
        cfg
    }

    pub fn output_blog_dir(&self) -> PathBuf {
        self.paths.output_dir.join(&self.defaults.blog_folder_name)
    }
}

impl Paths {
    fn rebase<F: Fn(PathBuf) -> PathBuf>(self, f: F) -> Paths {
        Paths {
            component_dir: f(self.component_dir),
            page_dir: f(self.page_dir),
            blog_dir: f(self.blog_dir),
            style_dir: f(self.style_dir),
            static_dir: f(self.static_dir),
            output_dir: f(self.output_dir),
        }
    }
}

fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match (exe_dir, path.strip_prefix("${exe_dir}")) {
        (Some(exe_dir), Ok(rest)) => exe_dir.join(rest),
        _ => path,
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = cfg.paths.rebase(parse_path);
    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}
