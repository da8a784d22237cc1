use std::fmt;

use thiserror::Error;

/// Byte offsets into the line typed at the prompt, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// The stage that rejected a line, or `Config` for a bad settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    Lexer,
    Parser,
    Runtime,
    Config,
}

/// A message for the prompt. Notes are printed on their own lines below it.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Option<SourceSpan>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span: None,
            notes: Vec::new(),
        }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Runtime, message)
    }

    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)?;
        if let Some(span) = self.span {
            write!(f, " ({}..{})", span.start, span.end)?;
        }
        if !self.notes.is_empty() {
            writeln!(f)?;
            for note in &self.notes {
                writeln!(f, "  note: {note}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

/// Everything that can fail while evaluating a line or loading settings.
#[derive(Debug, Error)]
pub enum MicrohelpError {
    #[error("{0}")]
    Diagnostic(#[from] Diagnostic),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MicrohelpError>;
