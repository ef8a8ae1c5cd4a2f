use std::fmt::{Display, Formatter};

use clap::{Parser, ValueEnum};

use crate::bootstrap::bootstrap_cmd;
use crate::format_code::format_code_cmd;
use crate::post::post_cmd;

mod bootstrap;
mod decompress;
mod format_code;
mod post;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Creating post
    Post(PostArgs),
    /// Bootstrap a new site
    Bootstrap(BootstrapArgs),
    /// Convert a code listing into the list markup used by posts
    FormatCode(FormatCodeArgs),
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct PostArgs {
    /// Title of the post
    #[arg(short, long)]
    title: String,

    /// Overview shown in the post cards
    #[arg(short = 'v', long, default_value = "Replace with an overview")]
    overview: String,

    /// Space separated tags
    #[arg(short = 'g', long, default_value = "")]
    tags: String,

    /// Post generation options
    #[arg(short, long, default_value_t = PostOutput::Stdout)]
    output: PostOutput,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct BootstrapArgs {
    /// Directory where the new site will be generated
    #[arg(short, long)]
    out_dir: String,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct FormatCodeArgs {
    /// File holding the code. Reads stdin when absent
    file: Option<String>,
}

#[derive(Clone, Debug, ValueEnum)]
enum PostOutput {
    /// Writes the new post content to the stdout
    Stdout,
    /// Writes the new post content to a file named after the title
    File,
}

impl Display for PostOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PostOutput::Stdout => write!(f, "stdout"),
            PostOutput::File => write!(f, "file"),
        }
    }
}

fn main() {
    let args = Args::parse();

    let res = match args {
        Args::Post(args) => post_cmd(args),
        Args::Bootstrap(args) => bootstrap_cmd(args),
        Args::FormatCode(args) => format_code_cmd(args),
    };

    if let Err(e) = res {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
