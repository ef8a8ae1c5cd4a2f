use std::fmt::Write;
use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use crate::{PostArgs, PostOutput};

fn render_header(title: &str, overview: &str, tags: &str, date: &NaiveDate) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "<!--{}-->", overview);
    let _ = writeln!(&mut buf, "<!--{}-->", tags);
    let _ = writeln!(&mut buf, "<div id='content-title'>");
    let _ = writeln!(&mut buf, "<h1>{}</h1>", title);
    let _ = writeln!(&mut buf, "<p id='content-date'>{}</p>", date.format("%b. %-d, %Y, %A"));
    let _ = writeln!(&mut buf, "</div>");
    buf
}

fn render_body() -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "<div id='content-wrapper'>");
    let _ = writeln!(&mut buf, "<p>This is a body example</p>");
    let _ = writeln!(&mut buf, "<p>Please remove it and replace with your content</p>");
    let _ = writeln!(&mut buf, "</div>");
    buf
}

/// Post pages keep the title as their name, folded to ASCII.
fn post_file_name(title: &str) -> String {
    let ascii = unidecode::unidecode(title);
    let name: String = ascii.chars()
        .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.'))
        .collect();
    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");

    format!("{}.html", name.trim_matches('.'))
}

pub fn post_cmd(args: PostArgs) -> Result<()> {
    let date = Local::now().date_naive();
    let header = render_header(&args.title, &args.overview, &args.tags, &date);
    let body = render_body();

    match args.output {
        PostOutput::Stdout => {
            print!("{}", header);
            print!("{}", body);
        }
        PostOutput::File => {
            use std::io::Write;
            let file_path = PathBuf::from(post_file_name(&args.title));
            println!("Creating file {}", file_path.display());
            let mut file = OpenOptions::new().write(true).create_new(true).open(&file_path)
                .with_context(|| format!("Error creating {}", file_path.display()))?;
            file.write_all(header.as_bytes())?;
            file.write_all(body.as_bytes())?;
        }
    };

    Ok(())
}
