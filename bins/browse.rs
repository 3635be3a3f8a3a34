use clap::{Parser, Subcommand};
use client::{CatalogSource, HttpCatalogApi, Screen, Session, View};
use dotenvy::dotenv;
use tracing::error;

/// Browse the SkillLink catalog from the terminal.
#[derive(Parser, Debug)]
#[command(name = "browse", version, about)]
struct Cli {
    /// API base URL (overrides API_BASE_URL / config.toml)
    #[arg(long, global = true)]
    api: Option<String>,

    /// Debug-level logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    view: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    Home,
    Workers,
    Services,
    Contact,
    /// Worker detail with the services they offer
    Worker { id: i32 },
    /// Service detail with its provider
    Service { id: i32 },
    /// Workers whose name or skill matches QUERY
    Search { query: String },
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    let cli = Cli::parse();
    common::utils::logging::init_logging_cli(cli.verbose);

    let mut cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg.client,
        Err(e) => {
            error!(error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    if let Some(api) = cli.api {
        cfg.api_base_url = api;
    }

    let api = match HttpCatalogApi::from_config(&cfg) {
        Ok(api) => api,
        Err(e) => {
            error!(error = %e, "failed to build http client");
            return std::process::ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(CatalogSource::new(api).load().await);
    let view = match cli.view.unwrap_or(Command::Home) {
        Command::Search { query } => {
            print!("{}", Screen::search(session.catalog(), &query));
            return std::process::ExitCode::SUCCESS;
        }
        Command::Home => View::Home,
        Command::Workers => View::Workers,
        Command::Services => View::Services,
        Command::Contact => View::Contact,
        Command::Worker { id } => View::WorkerDetail(id),
        Command::Service { id } => View::ServiceDetail(id),
    };
    session.navigate(view);
    if let (Some(e), View::WorkerDetail(_) | View::ServiceDetail(_)) = (session.error(), view) {
        eprintln!("Error: {e}");
    }
    print!("{}", session.screen());
    std::process::ExitCode::SUCCESS
}
