use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use core_seo::clock::{FixedClock, SystemClock};
use core_seo::common::logging::setup_logging;
use core_seo::{Result, SeoError, build, load_site_config, page_head, parse_sitemap};
use data_model_seo::LastModified;

/// Where generated files go unless told otherwise.
const DEFAULT_OUTPUT_DIR: &str = "public";

#[derive(Parser)]
#[command(name = "core-seo")]
#[command(about = "Build-time SEO toolkit: sitemap.xml, robots.txt and page head tags", long_about = None)]
struct CoreCli {
    /// Defaults to `build` with the built-in site configuration.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate sitemap.xml (always) and robots.txt (only if absent)
    Build(BuildArgs),

    /// Parse and validate an existing sitemap.xml
    Check {
        /// The sitemap file to parse and validate.
        #[arg(short, long, value_parser = validate_input_file)]
        file: PathBuf,
    },

    /// Print the <head> tags and JSON-LD for a page
    Head {
        /// Page key, e.g. `about`. Unknown keys fall back to `home`.
        #[arg(short, long, default_value = "home")]
        page: String,
        /// JSON site configuration. Uses the built-in configuration when omitted.
        #[arg(short, long, value_parser = validate_input_file)]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// JSON site configuration. Uses the built-in configuration when omitted.
    #[arg(short, long, value_parser = validate_input_file)]
    config: Option<PathBuf>,

    /// Directory that receives sitemap.xml and robots.txt; created if missing.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR, value_parser = validate_output_dir)]
    output_dir: PathBuf,

    /// Date used for `today` lastmod values (YYYY-MM-DD). Defaults to the current UTC date.
    #[arg(long, value_parser = validate_date)]
    today: Option<NaiveDate>,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            config: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            today: None,
        }
    }
}

fn validate_input_file(s: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("Input path does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Input path is not a file: {}", path.display()));
    }

    Ok(path)
}

fn validate_output_dir(s: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if path.exists() && !path.is_dir() {
        return Err(format!("Output path is not a directory: {}", path.display()));
    }

    Ok(path)
}

fn validate_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, LastModified::DATE_FORMAT).map_err(|e| format!("Invalid date '{}': {}", s, e))
}

fn run_build(args: &BuildArgs) -> Result<()> {
    let config = load_site_config(args.config.as_deref())?;
    let report = match args.today {
        Some(date) => build(&config, &args.output_dir, &FixedClock(date))?,
        None => build(&config, &args.output_dir, &SystemClock)?,
    };
    println!("Sitemap generated at {}", report.sitemap_path.display());
    if report.robots_written {
        println!("Robots.txt generated at {}", report.robots_path.display());
    }
    Ok(())
}

fn run_check(file: &Path) -> Result<()> {
    let xml = std::fs::read_to_string(file).map_err(SeoError::io(file))?;
    let sitemap = parse_sitemap(&xml)?;
    tracing::info!("{} URLs found in {}", sitemap.urls.len(), file.display());
    println!("Valid sitemap with {} URLs: {}", sitemap.urls.len(), file.display());
    Ok(())
}

fn run_head(page: &str, config: Option<&Path>) -> Result<()> {
    let config = load_site_config(config)?;
    print!("{}", page_head(&config, page));
    Ok(())
}

fn main() -> ExitCode {
    setup_logging("core_seo=info");
    let cli = CoreCli::parse();

    let result = match &cli.command {
        None => run_build(&BuildArgs::default()),
        Some(Commands::Build(args)) => run_build(args),
        Some(Commands::Check { file }) => run_check(file),
        Some(Commands::Head { page, config }) => run_head(page, config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
