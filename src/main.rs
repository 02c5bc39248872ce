mod app;
mod board;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::cli::{Arguments, CliCommand, HELP};
use crate::config::Config;
use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use std::io::ErrorKind;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cmd = match CliCommand::from_parser(lexopt::Parser::from_env()) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("wrapsnake: {e}");
            return ExitCode::from(2);
        }
    };
    match cmd {
        CliCommand::Help => {
            print!("{HELP}");
            ExitCode::SUCCESS
        }
        CliCommand::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        CliCommand::Run(args) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("{e:#}");
                eprintln!("wrapsnake: {e:?}");
                ExitCode::from(2)
            }
        },
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    if let Some(ref path) = args.log_file {
        init_logging(path).context("failed to set up logging")?;
    }
    let config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::default_path().map_or_else(
            |_| Ok(Config::default()),
            |path| Config::load(&path, true),
        ),
    }
    .context("failed to load configuration")?;
    let rng = match args.seed {
        Some(seed) => {
            log::info!("Using RNG seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let terminal = ratatui::try_init().context("failed to initialize terminal")?;
    let r = App::new(rng, config.colors).run(terminal);
    ratatui::restore();
    match r {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e).context("terminal I/O failed"),
    }
}

/// Send log records to the file at `path`.  The terminal is taken over by the
/// game, so logging is off unless a file is given.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .try_init()?;
    Ok(())
}
