use clap::{Parser, Subcommand};
use picabench_showcase::carousel::{Carousel, default_examples};
use picabench_showcase::gallery::GalleryPhase;
use picabench_showcase::{assets, config, manifest, output, render};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn version_string() -> &'static str {
    let version = output::format_version(
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("ON_RELEASE_TAG") == "true",
    );
    // Leaked once at startup
    Box::leak(version.into_boxed_str())
}

#[derive(Parser)]
#[command(name = "picabench-showcase")]
#[command(about = "Example carousel and comparison gallery for the PICABench showcase")]
#[command(long_about = "\
Example carousel and comparison gallery for the PICABench showcase

The gallery reads a static results manifest:

  {\"laws\": [{\"key\", \"label\", \"cases\": [
      {\"instruction\", \"input_image\", \"images\": [{\"id\", \"label\", \"path\"}]}
  ]}]}

Entries with id \"input\" or ids starting with \"005\" are not shown as cards;
at most 8 cards are shown per case.

Run 'picabench-showcase gen-config' to generate a documented showcase.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Showcase config file (optional; stock defaults when absent)
    #[arg(long, default_value = "showcase.toml", global = true)]
    config: PathBuf,

    /// Override the manifest path from the config
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize the manifest and verify referenced images exist
    Check,
    /// Render the showcase page in its initial state
    Render {
        /// Output HTML file
        #[arg(long, default_value = "dist/index.html")]
        output: PathBuf,
        /// Page title
        #[arg(long, default_value = "PICABench")]
        title: String,
    },
    /// Print a stock showcase.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check => {
            let site_config = config::load_config(&cli.config)?;
            let manifest_path = resolve_manifest(cli.manifest.as_deref(), &site_config);
            println!("==> Checking {}", manifest_path.display());
            let manifest = manifest::load_manifest(&manifest_path)?;
            let examples = default_examples();
            let report = assets::verify_assets(
                Path::new(&site_config.asset_root),
                &manifest,
                &examples,
                &site_config.gallery,
            );
            output::print_check_output(&manifest, &site_config.gallery, &examples, &report);
            if report.is_complete() && manifest.duplicate_keys().is_empty() {
                println!("==> Manifest is valid");
            } else {
                println!("==> Manifest has warnings");
            }
        }
        Command::Render { output, title } => {
            let site_config = config::load_config(&cli.config)?;
            let manifest_path = resolve_manifest(cli.manifest.as_deref(), &site_config);
            let carousel = Carousel::new(default_examples(), site_config.carousel.interval());
            let phase = GalleryPhase::from_load(
                manifest::load_manifest(&manifest_path),
                &site_config.gallery,
            );
            let page = render::render_page(&title, carousel.as_ref(), &phase);
            render::write_page(&output, page)?;
            info!(output = %output.display(), "showcase rendered");
            println!("Generated {}", output.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// The `--manifest` flag wins over the config file.
fn resolve_manifest(cli_manifest: Option<&Path>, site_config: &config::ShowcaseConfig) -> PathBuf {
    cli_manifest
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&site_config.manifest))
}
