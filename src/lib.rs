//! Interactive help for a MicroPython-flavoured micro:bit runtime.
//!
//! The heart of the crate is [`help::HelpResolver`], which decides what
//! `help(x)` prints from two static documentation tables and, failing
//! those, from the symbol table of the value's module or type.

pub mod ast;
pub mod builtins;
pub mod config;
pub mod diagnostics;
pub mod docs;
pub mod help;
pub mod help_texts;
pub mod host;
pub mod lexer;
pub mod microbit;
pub mod parser;
pub mod repl;
pub mod runtime;
pub mod symbols;
pub mod value;

pub use config::HelpConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, MicrohelpError, SourceSpan};
pub use docs::DocRegistry;
pub use help::HelpResolver;
pub use host::ObjectModel;
pub use repl::Repl;
pub use runtime::Runtime;
