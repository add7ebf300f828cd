use clap::Parser;
use metatags::application::{init, InjectService, LookupService, RenderService};
use metatags::cli::{format_summary, Cli, Commands};
use metatags::error::Result;
use metatags::infrastructure::PageManifest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr so rendered markup on stdout stays clean
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("metatags=debug")
    } else {
        EnvFilter::try_from_env("METATAGS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_manifest(manifest: Option<PathBuf>) -> Result<PathBuf> {
    match manifest {
        Some(path) => Ok(path),
        None => PageManifest::discover(),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let created = init::init(&path)?;
            println!("Created {}", created.display());
            Ok(())
        }
        Commands::Render {
            manifest,
            output,
            summary,
        } => {
            let service = RenderService::from_path(&resolve_manifest(manifest)?)?;

            if summary {
                print!("{}", format_summary(&service.registry()?));
                return Ok(());
            }

            match output {
                Some(path) => {
                    service.render_to(&path)?;
                    println!("Wrote tags to: {}", path.display());
                }
                None => print!("{}", service.render()?),
            }
            Ok(())
        }
        Commands::Inject {
            html,
            manifest,
            output,
        } => {
            let markup = RenderService::from_path(&resolve_manifest(manifest)?)?.render()?;
            let written = InjectService::new(markup).inject_file(&html, output.as_deref())?;
            println!("Injected tags into: {}", written.display());
            Ok(())
        }
        Commands::Get {
            namespace,
            key,
            manifest,
        } => {
            let registry = RenderService::from_path(&resolve_manifest(manifest)?)?.registry()?;
            let value = LookupService::new(registry).lookup(&namespace, &key)?;
            println!("{}", value);
            Ok(())
        }
    }
}
