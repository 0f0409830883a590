use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stencil::{auth, compose, config, content, samples};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "Content pipeline for a tattoo studio portfolio site")]
#[command(long_about = "\
Content pipeline for a tattoo studio portfolio site

Records are TOML files; the file stem is the record's slug, and an optional
NNN- prefix orders the collection.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── artists/
  │   ├── 010-alex.toml            # Artist record (slug: alex)
  │   └── 020-gil.toml
  ├── styles/
  │   ├── linework.toml            # Style record (slug: linework)
  │   └── blackwork.toml
  └── works/
      ├── 001-eagle.toml           # One photographed piece per file
      └── 002-woodcut-wolf.toml

'stencil build' resolves every cross-reference (style pages collect their
artists and work photos, artist pages collect their style links and works)
and writes dist/manifest.json plus dist/tokens.css for the site renderer.

'stencil serve' runs the CMS OAuth endpoint (GET /api/auth). Configure it
via GITHUB_CLIENT_ID and PUBLIC_BASE_URL, or config.toml.

Run 'stencil gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load content and write the composed site manifest
    Build,
    /// Validate content without building
    Check,
    /// Write the built-in sample content into the content directory
    Seed,
    /// Serve the CMS OAuth endpoint
    Serve {
        /// Listen address
        #[arg(long, default_value = "127.0.0.1:4321")]
        addr: SocketAddr,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let catalog = content::load(&cli.source)?;
            for finding in catalog.dangling_refs() {
                tracing::warn!("{finding}");
            }

            println!("==> Composing site manifest");
            let site_config = config::load_config(&cli.source)?;
            let manifest = compose::compose(&catalog, &site_config);
            compose::write(&manifest, &cli.output)?;
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let catalog = content::load(&cli.source)?;
            config::load_config(&cli.source)?;

            let findings = catalog.dangling_refs();
            for finding in &findings {
                tracing::warn!("{finding}");
            }
            println!(
                "{} artists, {} styles, {} works, {} dangling reference(s)",
                catalog.artists.len(),
                catalog.styles.len(),
                catalog.works.len(),
                findings.len()
            );
            println!("==> Content is valid");
        }
        Command::Seed => {
            samples::seed(&cli.source)?;
            println!("Sample content written to {}", cli.source.display());
        }
        Command::Serve { addr } => {
            let site_config = config::load_config(&cli.source)?;
            let settings = auth::AuthSettings::resolve(&site_config);
            tokio::runtime::Runtime::new()?.block_on(auth::serve(settings, addr))?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
