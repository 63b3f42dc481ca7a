use crate::demo::{run_assess, run_catalog, run_demo, run_emergency, AssessArgs, CatalogCommand};
use crate::server;
use clap::{Args, Parser, Subcommand};
use seizure_insight::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Seizure Insight Advisor",
    about = "Score epilepsy questionnaires and browse seizure reference catalogs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess a questionnaire stored as JSON
    Assess(AssessArgs),
    /// List seizure types or drugs from the reference catalogs
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Print the seizure first-aid script
    Emergency,
    /// Assess two built-in sample questionnaires and print the reports
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Catalog { command } => {
            run_catalog(command);
            Ok(())
        }
        Command::Emergency => {
            run_emergency();
            Ok(())
        }
        Command::Demo => {
            run_demo();
            Ok(())
        }
    }
}
