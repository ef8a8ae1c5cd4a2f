use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::decompress::decompress_files;
use crate::BootstrapArgs;

const SITE_CFG: &str = "sitewright.toml";

lazy_static! {
    static ref RELATIVE_DIR_RE: Regex = Regex::new(r#"(?m)^(\w+_dir\s*=\s*")([^"/$][^"]*)""#).unwrap();
}

/// Anchors every relative `*_dir` entry of the sample configuration at `prefix`,
/// so the generated site builds no matter where it is run from.
fn replace_paths(prefix: &Path, config_data: &str) -> String {
    let prefix = prefix.to_string_lossy().replace('\\', "/");
    let prefix = prefix.trim_end_matches('/');

    RELATIVE_DIR_RE.replace_all(config_data, |caps: &Captures| {
        format!("{}{}/{}\"", &caps[1], prefix, &caps[2])
    }).to_string()
}

fn write_site_cfg(out_dir: &Path) -> Result<()> {
    let cfg_path = out_dir.join(SITE_CFG);
    let sample_cfg = fs::read_to_string(&cfg_path)
        .with_context(|| format!("Error reading {}", cfg_path.display()))?;
    fs::write(&cfg_path, replace_paths(out_dir, &sample_cfg))
        .with_context(|| format!("Error writing {}", cfg_path.display()))?;
    Ok(())
}

pub fn bootstrap_cmd(args: BootstrapArgs) -> Result<()> {
    let out_path = PathBuf::from(&args.out_dir);
    fs::create_dir_all(&out_path)
        .with_context(|| format!("Error creating {}", out_path.display()))?;

    let out_path = fs::canonicalize(&out_path)
        .with_context(|| format!("Error converting path to absolute: {}", args.out_dir))?;

    if fs::read_dir(&out_path)?.next().is_some() {
        bail!("Output directory must be empty: {}", out_path.display());
    }

    decompress_files(&out_path).context("Error bootstrapping")?;
    write_site_cfg(&out_path)?;
    println!("New site created in {}", out_path.display());
    println!("Run sitewright -c {} to build it", out_path.join(SITE_CFG).display());
    Ok(())
}
