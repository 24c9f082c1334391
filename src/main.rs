use std::path::PathBuf;

use clap::{ArgAction, Parser};
use env_logger::Env;
use path_size::commands::execute_size;
use path_size::commands::size::SizeOptions;
use path_size::error::AppError;
use path_size::model::HiddenRootPolicy;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let options = SizeOptions {
        path: cli.path,
        recursive: cli.recursive,
        human: cli.human,
        all: cli.all,
        hidden_root: cli.hidden_root,
    };
    execute_size(options)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

#[derive(Parser)]
#[command(
    name = "path-size",
    version,
    about = "Print the size of a file or directory.",
    long_about = "Print the size of a file or directory.\n\n\
        If PATH is a directory, the total size of the files it contains is shown.\n\
        Defaults can be set in $XDG_CONFIG_HOME/path-size/config.toml.",
    after_help = "Examples:\n  path-size file.txt\n  path-size -H file.txt\n  path-size -r -a -H directory/"
)]
struct Cli {
    /// File or directory to measure.
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Include files in nested subdirectories.
    #[arg(short, long, action = ArgAction::SetTrue)]
    recursive: bool,

    /// Print sizes in human-readable units (KB, MB, ...).
    #[arg(short = 'H', long, action = ArgAction::SetTrue)]
    human: bool,

    /// Include hidden files and directories.
    #[arg(short, long, action = ArgAction::SetTrue)]
    all: bool,

    /// How to treat a hidden file named directly without --all (report or skip).
    #[arg(long = "hidden-root", value_name = "POLICY")]
    hidden_root: Option<HiddenRootPolicy>,

    /// Log skipped entries and other diagnostics to stderr.
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}
