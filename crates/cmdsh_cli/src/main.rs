use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::tty::IsTty;
use cmdsh_builtins::standard_registry;
use cmdsh_core::config::DEFAULT_LOG_FILE;
use cmdsh_core::{logging, Console, Dispatcher, ErrorLog, ShellConfig};
use cmdsh_hal::{FileSystem, HostSystemInfo};
use tracing::info;

mod repl;

/// Interactive shell for browsing and managing local files.
#[derive(Parser, Debug)]
#[command(author, version, about = "cmdsh command-line interface", long_about = None)]
struct Cli {
    /// Command line to execute instead of launching the interactive shell.
    #[arg()]
    command: Option<String>,

    /// File that failures are appended to.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Disable colored success/failure output.
    #[arg(long)]
    no_color: bool,

    /// Diagnostic log filter (e.g. `debug`, `cmdsh_core=trace`).
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> ShellConfig {
        ShellConfig {
            log_file: self.log_file.clone(),
            color: !self.no_color && io::stdout().is_tty(),
            log_level: self.log_level.clone(),
            ..ShellConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = cli.config();
    logging::init_tracing(&config.log_level)?;

    let start = FileSystem::new().current_dir()?;
    config.anchor_log_file(&start);
    info!(log_file = %config.log_file.display(), "starting session");

    let console = Console::stdio(config.color);
    let mut dispatcher = Dispatcher::new(standard_registry(), console, Box::new(HostSystemInfo::new()))
        .with_error_log(ErrorLog::new(config.log_file.clone()));

    let code = match &cli.command {
        Some(line) => repl::run_once(&mut dispatcher, line),
        None => repl::run(&mut dispatcher, &config, io::stdin().lock())?,
    };

    dispatcher.console_mut().flush()?;
    std::process::exit(code);
}
