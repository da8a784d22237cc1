use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use microhelp::{HelpConfig, MicrohelpError, Repl, Runtime};

#[derive(Parser)]
#[command(author, version, about = "MicroPython-style help for the BBC micro:bit")]
struct Args {
    /// TOML file with welcome and prompt settings
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Log resolver decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive session
    Repl,
    /// Evaluate one or more lines, e.g. `help(microbit.display)`
    Eval { lines: Vec<String> },
    /// Print the configured welcome text
    Welcome,
}

fn main() -> Result<(), MicrohelpError> {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => HelpConfig::load(path)?,
        None => HelpConfig::default(),
    };

    match args.command.unwrap_or(Command::Repl) {
        Command::Repl => Repl::with_config(&config).run(),
        Command::Eval { lines } => {
            let runtime = Runtime::with_config(&config);
            let mut stdout = io::stdout().lock();
            for line in &lines {
                runtime.eval_line(line, &mut stdout)?;
            }
            stdout.flush()?;
            Ok(())
        }
        Command::Welcome => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(config.welcome_text().as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("MICROHELP_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("microhelp=debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
