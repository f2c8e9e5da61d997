//! paramdoc CLI entrypoint
//! Parses command-line arguments and runs parameter extraction over a metadata file.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::{Parser, ValueEnum};
use paramdoc_core::{ApiMetadata, Config, TagKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "paramdoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Extract documented parameters for every endpoint in a metadata file
    Extract {
        /// Path to the API metadata file (YAML or JSON)
        metadata: PathBuf,
        /// Configuration file (YAML); defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Which parameter tags to extract
        #[arg(long, value_enum, default_value_t = KindArg::All)]
        kind: KindArg,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Seed for generated example values (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    Body,
    Url,
    All,
}

impl KindArg {
    fn kinds(self) -> Vec<TagKind> {
        match self {
            Self::Body => vec![TagKind::BodyParam],
            Self::Url => vec![TagKind::UrlParam],
            Self::All => TagKind::all().collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the extraction result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract {
            metadata,
            config,
            kind,
            format,
            seed,
        } => {
            let mut config = match &config {
                Some(path) => Config::from_file(path)
                    .await
                    .with_context(|| format!("Failed to load config from {}", path.display()))?,
                None => Config::default(),
            };
            if let Some(seed) = seed {
                config.example_seed = seed;
            }

            let api = ApiMetadata::from_file(&metadata)
                .await
                .with_context(|| format!("Failed to load metadata from {}", metadata.display()))?;
            tracing::info!(
                endpoints = api.endpoints.len(),
                types = api.types.len(),
                "loaded metadata"
            );

            let results = paramdoc_core::extract_all(&api, &config, &kind.kinds());
            for result in results.iter().filter(|r| !r.errors.is_empty()) {
                for error in &result.errors {
                    tracing::warn!(route = %result.route, "{}", error);
                }
            }

            let output = match format {
                Format::Json => serde_json::to_string_pretty(&results)?,
                Format::Yaml => serde_yaml::to_string(&results)?,
            };
            println!("{}", output);
        }
    }
    Ok(())
}
