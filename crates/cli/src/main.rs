use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use promptloom_engine::{DomainContext, Engine, EngineConfig};
use promptloom_taxonomy::Taxonomy;

#[derive(Parser)]
#[command(name = "promptloom")]
#[command(about = "Brand-aware prompt enhancement for generative image models", long_about = None)]
#[command(version)]
struct Cli {
    /// Prompt to enhance
    prompt: String,

    /// Taxonomy JSON file (defaults to the built-in green-brand taxonomy)
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Engine configuration TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Domain context JSON file forwarded to the engine
    #[arg(long)]
    context: Option<PathBuf>,

    /// Cap on applied enhancements (overrides the config file)
    #[arg(long)]
    max_enhancements: Option<usize>,

    /// Print the full result as pretty JSON instead of just the prompts
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let taxonomy = match &cli.taxonomy {
        Some(path) => Taxonomy::from_path(path)
            .with_context(|| format!("loading taxonomy from {}", path.display()))?,
        None => Taxonomy::builtin().context("loading built-in taxonomy")?,
    };

    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config from {}", path.display()))?;
            toml::from_str::<EngineConfig>(&text)
                .with_context(|| format!("parsing config from {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(max) = cli.max_enhancements {
        config.max_enhancements = max;
    }

    let context: Option<DomainContext> = match &cli.context {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading domain context from {}", path.display()))?;
            Some(
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing domain context from {}", path.display()))?,
            )
        }
        None => None,
    };

    let engine = Engine::new(Arc::new(taxonomy), config);
    let result = engine.enhance(&cli.prompt, context.as_ref());

    if result.metadata.fallback_used {
        log::info!("no concepts matched; default brand enhancement applied");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.enhanced_prompt);
        println!("negative: {}", result.negative_prompt);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}
