use std::{fs, io, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use site_index::{diff::diff, SiteConfig, SiteIndex};
use tracing_subscriber::EnvFilter;

fn parse_path(arg: &str) -> Result<PathBuf, io::Error> {
    let path = PathBuf::from(arg);
    match path.try_exists() {
        Ok(true) => Ok(path),
        Ok(false) => Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Path not found".to_string(),
        )),
        Err(e) => Err(e),
    }
}

#[derive(Parser, Debug)]
#[command(author, about, version)]
struct Cli {
    /// The site repository root the other paths are relative to
    #[arg(long, default_value = ".")]
    #[clap(value_parser = parse_path)]
    root: PathBuf,

    /// The zola config to read `base_url` from
    #[arg(long, default_value = "site/config.toml")]
    config: PathBuf,

    /// The directory of markdown pages to index
    #[arg(long, default_value = "site/content")]
    content: PathBuf,

    /// Where to write the index
    #[arg(short, long, default_value = "site/static/site-index.json")]
    output: PathBuf,

    /// Use this base url instead of the one in the config
    #[arg(long)]
    base_url: Option<String>,

    /// Compare the index on disk with a fresh build instead of writing it
    #[arg(long)]
    check: bool,

    /// Log every indexed and skipped page
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let config_path = args.root.join(&args.config);
    let content_root = args.root.join(&args.content);
    let output = args.root.join(&args.output);

    let mut config = SiteConfig::read(&config_path);
    if let Some(base_url) = args.base_url {
        config = config.extends(SiteConfig::with_base_url(base_url));
    }

    let index = SiteIndex::build(&content_root, &config)
        .with_context(|| format!("failed to index {}", content_root.display()))?;

    if args.check {
        let existing = match fs::read_to_string(&output) {
            Ok(existing) => existing,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", output.display()))
            }
        };
        return match diff(&existing, &index.to_json()?) {
            None => {
                println!("{} is up to date ({} entries)", output.display(), index.len());
                Ok(ExitCode::SUCCESS)
            }
            Some(rendered) => {
                print!("{rendered}");
                println!("{} is out of date", output.display());
                Ok(ExitCode::FAILURE)
            }
        };
    }

    index.write(&output)?;
    println!("Wrote {} entries to {}", index.len(), output.display());
    Ok(ExitCode::SUCCESS)
}
