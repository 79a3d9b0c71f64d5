//! Catalog inspection CLI.
//!
//! Reads the same environment as the showcase server and reports on the
//! token store, the component registry, package themes and dashboard routes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use designkit::application::system::{Application, build_routes, build_tokens, discovery_pass};
use designkit::application::theme::{PackageTheme, ThemeBinding};
use designkit::config::Config;
use designkit::domain::catalog::ComponentStatus;
use designkit::domain::routes::RenderTarget;
use tracing::Level;

#[derive(Parser)]
#[command(author, version, about = "Design token and component catalog tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeFormat {
    Json,
    Css,
}

#[derive(Subcommand)]
enum Commands {
    /// List every token by category
    Tokens,
    /// Run a discovery pass and report catalog health
    Check {
        /// Also list the components that are still stubs
        #[arg(long)]
        stubs: bool,
    },
    /// Print a package's theme configuration
    Theme {
        /// Consuming package (ui, showcase, dashboard)
        #[arg(short, long, default_value = "ui")]
        package: String,

        #[arg(short, long, value_enum, default_value = "json")]
        format: ThemeFormat,
    },
    /// List dashboard routes and what they resolve to
    Routes,
    /// Resolve a LazyHeavy component from the dist directory
    Load {
        /// Component name, case-insensitive
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Tokens => {
            let store = build_tokens(&config.catalog)?;
            println!("Token store version {}", store.version());
            for category in store.categories() {
                println!("\n[{}]", category);
                for (key, value) in store.entries(category) {
                    println!("  {:<24} {}", key, value);
                }
            }
        }
        Commands::Check { stubs } => {
            let registry = discovery_pass(&config.catalog)
                .run()
                .context("Catalog integrity check failed")?;
            let health = registry.health();

            println!("Components:   {}", health.total);
            println!("Implemented:  {}", health.implemented);
            println!("Lazy-heavy:   {}", health.lazy_heavy);
            println!("Stubs:        {}", health.stubs);
            println!("Coverage:     {:.1}%", health.coverage() * 100.0);

            if stubs {
                println!();
                for descriptor in registry.with_status(ComponentStatus::Stub) {
                    println!("  {} ({:?})", descriptor.name(), descriptor.kind());
                }
            }
        }
        Commands::Theme { package, format } => {
            let Some(binding) = ThemeBinding::for_package(&package) else {
                bail!(
                    "Unknown package '{}'. Must be one of: {}",
                    package,
                    ThemeBinding::PACKAGES.join(", ")
                );
            };
            let store = build_tokens(&config.catalog)?;
            let theme = PackageTheme::build(&store, &binding)
                .with_context(|| format!("Theme for '{}' references a missing token", package))?;

            match format {
                ThemeFormat::Json => println!("{}", serde_json::to_string_pretty(&theme)?),
                ThemeFormat::Css => print!("{}", theme.to_css_variables()),
            }
        }
        Commands::Routes => {
            let resolver = build_routes(&config.catalog)?;
            for entry in resolver.navigation() {
                let target = match &entry.target {
                    RenderTarget::Module(module) => {
                        format!("module {} ({})", module.name, module.entry)
                    }
                    RenderTarget::Placeholder(spec) => format!("placeholder: {}", spec.description),
                };
                println!("{:<16} {:<20} {}", entry.path.as_str(), entry.title, target);
            }
        }
        Commands::Load { name } => {
            let app = Application::build(config)?;
            let resolver = app.lazy_resolver();
            let module = resolver.resolve(&name).await?;
            println!("{} -> {} ({} bytes)", module.component, module.resource, module.size());
        }
    }

    Ok(())
}
