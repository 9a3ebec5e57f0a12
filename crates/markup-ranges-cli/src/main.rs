mod document;
mod render;

use anyhow::{Context, Result, bail};
use markup_ranges_config::Config;
use std::{env, path::PathBuf, process};

use document::Document;

struct Args {
    document: PathBuf,
    config: Option<PathBuf>,
    segments: bool,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut document = None;
        let mut config = None;
        let mut segments = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--segments" => segments = true,
                "--config" => {
                    let path = args.next().context("--config expects a path")?;
                    config = Some(expand(PathBuf::from(path)));
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                _ if document.is_none() => document = Some(expand(PathBuf::from(&arg))),
                _ => bail!("unexpected argument {arg}"),
            }
        }

        Ok(Self {
            document: document.context("missing document path")?,
            config,
            segments,
        })
    }
}

fn expand(path: PathBuf) -> PathBuf {
    Config::expand_path(&path).unwrap_or(path)
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            log::info!("Loading config from {}", path.display());
            Config::load_from_path(path)?
                .with_context(|| format!("config file {} not found", path.display()))?
        }
        None => match Config::load()? {
            Some(config) => {
                log::info!("Loaded config from {}", Config::config_path().display());
                config
            }
            None => {
                log::info!("No config file found, using default markdown styles");
                Config::default()
            }
        },
    };
    Ok(loaded)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    let doc = Document::load(&args.document)?;
    let ranges = doc
        .styled_ranges()
        .with_context(|| format!("invalid range in {}", args.document.display()))?;
    log::info!(
        "Loaded {} ranges over {} chars",
        ranges.len(),
        doc.text.chars().count()
    );

    if args.segments {
        println!("{}", render::describe(&doc.text, &render::segments(&doc.text, &ranges)));
    } else {
        println!("{}", render::render(&doc.text, &ranges, &config));
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "markup-ranges".to_string());

    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Usage: {program_name} <document.toml> [--config <config.toml>] [--segments]"
            );
            process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
