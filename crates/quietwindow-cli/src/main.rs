use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "quietwindow",
    version,
    about = "Find the least popular time to visit a place"
)]
struct Cli {
    /// Trace logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Least busy hour of the whole week
    Best(commands::analyze::BestArgs),
    /// Least busy hours of one day
    Day(commands::analyze::DayArgs),
    /// Least busy hours for every day of the week
    Week(commands::analyze::WeekArgs),
    /// Place details and weekly occupancy grid
    Show(commands::analyze::ShowArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result = match cli.command {
        Commands::Best(args) => commands::analyze::best(args),
        Commands::Day(args) => commands::analyze::day(args),
        Commands::Week(args) => commands::analyze::week(args),
        Commands::Show(args) => commands::analyze::show(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
