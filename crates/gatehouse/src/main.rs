mod bundled;
mod cli;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use gatehouse_core::router::menu_for;
use gatehouse_core::ui_bridge::PageContent;
use gatehouse_core::{DashboardConfig, Layout, Navigation, NavigationSession, PluginLoader, RenderDispatcher};
use log::{debug, info};

/// Gatehouse: plugin route resolver for the visitor-management dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Print "pong" and exit
    #[arg(long)]
    ping: bool,

    /// Configuration file (.json, .yaml, .yml or .toml)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Try the remote plugin catalog before local sources
    #[arg(long)]
    prefer_remote: bool,

    /// Base URL of the backend plugin catalog
    #[arg(long)]
    catalog_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a request path and print the rendered page
    Resolve {
        /// Full request path, e.g. /electricity/validate
        path: String,
        /// Shell to resolve for (admin or resident)
        #[arg(long)]
        audience: Option<Layout>,
    },
    /// Inspect loaded plugins
    Plugins {
        #[command(subcommand)]
        command: PluginCommand,
    },
    /// Print the navigation menu of a shell
    Menu {
        #[arg(long)]
        audience: Option<Layout>,
    },
}

#[derive(Subcommand, Debug)]
enum PluginCommand {
    /// List plugins in load order
    List {},
}

/// Exit status of `resolve` when no route matched
const EXIT_NOT_FOUND: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.ping {
        println!("pong");
        return ExitCode::SUCCESS;
    }

    let mut config = match DashboardConfig::load_or_default(args.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if args.prefer_remote {
        config.prefer_remote = true;
    }
    if let Some(url) = args.catalog_url {
        config.catalog_url = Some(url);
    }
    // Flags bypass the checks run while reading the file
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = logging::init(&config.log) {
        eprintln!("Logging disabled: {}", e);
    }
    debug!("Effective configuration: {:?}", config);

    let loader = PluginLoader::from_config(&config, bundled::plugins());
    info!("Plugin sources: {}", loader.strategy_names().join(" -> "));
    let dispatcher =
        RenderDispatcher::new(Arc::new(bundled::components())).with_default_dashboard(&config.default_dashboard);

    match args.command {
        Some(Commands::Resolve { path, audience }) => {
            let layout = audience.unwrap_or(config.default_layout);
            let session = NavigationSession::new(Arc::new(loader), dispatcher);
            match session.navigate(&path, layout).await {
                Navigation::Rendered(page) => {
                    cli::print_page(&page);
                    match page.content {
                        PageContent::View { .. } => ExitCode::SUCCESS,
                        PageContent::NotFound { .. } => ExitCode::from(EXIT_NOT_FOUND),
                        PageContent::PluginError { .. } => ExitCode::FAILURE,
                    }
                }
                // Only one navigation runs per process
                Navigation::Superseded { path } => {
                    eprintln!("Navigation to '{}' was superseded", path);
                    ExitCode::FAILURE
                }
            }
        }
        Some(Commands::Plugins { command: PluginCommand::List {} }) => {
            let plugins = loader.load().await;
            cli::print_plugins(&plugins);
            ExitCode::SUCCESS
        }
        Some(Commands::Menu { audience }) => {
            let layout = audience.unwrap_or(config.default_layout);
            let plugins = loader.load().await;
            cli::print_menu(&menu_for(&plugins, layout), layout);
            ExitCode::SUCCESS
        }
        None => {
            let plugins = loader.load().await;
            println!("{} plugin(s) loaded. Run `gatehouse resolve <path>` to resolve a route.", plugins.len());
            ExitCode::SUCCESS
        }
    }
}
