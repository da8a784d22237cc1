use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    diagnostics::{Diagnostic, DiagnosticKind, MicrohelpError, Result},
    help_texts::{WELCOME, WELCOME_SECTIONS},
};

/// Which welcome text `help()` prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WelcomeStyle {
    #[default]
    Short,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelpConfig {
    pub welcome: WelcomeStyle,
    /// Replaces the built-in welcome text entirely.
    pub welcome_text: Option<String>,
    pub prompt: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            welcome: WelcomeStyle::Short,
            welcome_text: None,
            prompt: ">>> ".into(),
        }
    }
}

impl HelpConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.prompt.is_empty() {
            return Err(MicrohelpError::from(Diagnostic::new(
                DiagnosticKind::Config,
                "prompt must not be empty",
            )));
        }
        if let Some(text) = &self.welcome_text {
            if !text.ends_with('\n') {
                return Err(MicrohelpError::from(
                    Diagnostic::new(DiagnosticKind::Config, "welcome_text must end with a newline")
                        .with_note("use a TOML multi-line string or add `\\n`"),
                ));
            }
        }
        Ok(())
    }

    pub fn welcome_text(&self) -> String {
        match (&self.welcome_text, self.welcome) {
            (Some(text), _) => text.clone(),
            (None, WelcomeStyle::Short) => WELCOME.to_string(),
            (None, WelcomeStyle::Full) => WELCOME_SECTIONS.concat(),
        }
    }
}
