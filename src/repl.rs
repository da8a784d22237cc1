use std::io::{self, Write};

use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::debug;

use crate::{
    config::HelpConfig,
    diagnostics::{MicrohelpError, Result},
    runtime::Runtime,
};

pub struct Repl {
    runtime: Runtime,
    prompt: String,
}

impl Repl {
    pub fn new() -> Self {
        Self::with_config(&HelpConfig::default())
    }

    pub fn with_config(config: &HelpConfig) -> Self {
        Self {
            runtime: Runtime::with_config(config),
            prompt: config.prompt.clone(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new().map_err(|err| {
            MicrohelpError::from(io::Error::new(io::ErrorKind::Other, err))
        })?;
        writeln!(io::stdout(), "Type \"help()\" for more information.")?;
        loop {
            match editor.readline(&self.prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    editor.add_history_entry(trimmed).ok();
                    let mut stdout = io::stdout().lock();
                    match self.runtime.eval_line(trimmed, &mut stdout) {
                        Ok(()) => {}
                        Err(MicrohelpError::Diagnostic(diag)) => {
                            eprintln!("{:?}: {}", diag.kind, diag.message);
                            for note in &diag.notes {
                                eprintln!("  note: {note}");
                            }
                        }
                        Err(other) => return Err(other),
                    }
                    stdout.flush()?;
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    debug!("leaving repl");
                    break;
                }
                Err(err) => {
                    return Err(MicrohelpError::from(io::Error::new(
                        io::ErrorKind::Other,
                        err,
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}
