use crate::demo::{run_advise, run_demo, AdviseArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use study_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Study Advisor",
    about = "Run the student activity advisor as an HTTP service or from the command line",
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
    /// Evaluate a student state document and print ranked recommendations
    Advise(AdviseArgs),
    /// Run canned end-to-end scenarios through the inference engine
    Demo(DemoArgs),
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
        Command::Advise(args) => run_advise(args),
        Command::Demo(args) => run_demo(args),
    }
}
