use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use spdlog::{error, info, warn};

use sitewright::logger::configure_logger;
use sitewright::site_generator::SiteGenerator;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "sitewright.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,
}

fn main() {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run sitewright --help");
            exit(1);
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Starting sitewright =-=-=-=-=-=-=-=-=-=-=-=-=-=-=-");
    let result = SiteGenerator::new(&config).run();
    if let Err(err) = result {
        error!("Site generation failed: {:#}", err);
        spdlog::default_logger().flush();
        exit(1);
    }

    spdlog::default_logger().flush();
}
