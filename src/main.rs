use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use xsux_ime::config::Locations;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    locations: Locations,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the install and user directories and the seeded config files
    Paths,
    /// Show the configured Latin and cuneiform fonts
    Fonts(cmd::fonts::FontsArgs),
    /// Show the Latin layout table
    Layout(cmd::layout::LayoutArgs),
    /// Look up the character produced by one virtual-key code
    Key(cmd::key::KeyArgs),
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let dirs = cli.locations.resolve().unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    info!(
        "Install dir: {}, user dir: {}",
        dirs.install_dir().display(),
        dirs.user_dir().display()
    );

    let result = match cli.command {
        Commands::Paths => cmd::paths::run(&dirs),
        Commands::Fonts(args) => cmd::fonts::run(args, &dirs),
        Commands::Layout(args) => cmd::layout::run(args, &dirs),
        Commands::Key(args) => cmd::key::run(args, &dirs),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
