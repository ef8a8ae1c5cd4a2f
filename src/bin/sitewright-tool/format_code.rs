use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};

use sitewright::code_format::format_code_html;

use crate::FormatCodeArgs;

pub fn format_code_cmd(args: FormatCodeArgs) -> Result<()> {
    let code = match args.file {
        Some(ref file) => fs::read_to_string(file)
            .with_context(|| format!("Error reading {}", file))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Error reading stdin")?;
            buf
        }
    };

    println!("{}", format_code_html(&code));
    Ok(())
}
