//! Command-line argument parsing for the field driver
//!
//! Supports:
//! - Picking a configured field by label, or an ad-hoc kind/separator
//! - A key script: DOM key names or literal text typed character by character
//! - JSON output of every emission

use clap::Parser;
use std::path::PathBuf;

use crate::config::{FieldSpec, InputConfig};
use crate::keys::Key;

/// Drive a masked input field from the command line
#[derive(Parser, Debug)]
#[command(
    name = "masked-input",
    version,
    about = "Type into a masked currency or phone number field"
)]
pub struct CliArgs {
    /// Keys to press: names like Backspace, Delete, ArrowLeft, Home, End,
    /// Enter, Tab (blurs the field), or literal text to type
    #[arg(value_name = "KEYS")]
    pub keys: Vec<String>,

    /// Format kind for an ad-hoc field (currency or phoneNumber)
    #[arg(short, long, value_name = "KIND", conflicts_with = "field")]
    pub kind: Option<String>,

    /// Group separator for an ad-hoc field
    #[arg(short, long, value_name = "CHAR", requires = "kind")]
    pub separator: Option<char>,

    /// Use the configured field with this label
    #[arg(short, long, value_name = "LABEL")]
    pub field: Option<String>,

    /// Read field definitions from this file instead of the user config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print each emission as a JSON line
    #[arg(long)]
    pub json: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Field to drive
    pub field: FieldSpec,
    /// Keys to press, in order
    pub keys: Vec<Key>,
    /// Emit JSON lines instead of a table
    pub json: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self, config: &InputConfig) -> Result<StartupConfig, String> {
        let field = if let Some(kind) = self.kind {
            let separator = self
                .separator
                .unwrap_or_else(|| default_separator_for(&kind));
            FieldSpec::new("cli", &kind, separator)
        } else if let Some(label) = self.field {
            config
                .field(&label)
                .cloned()
                .ok_or_else(|| format!("No field labelled '{}' in config", label))?
        } else {
            config
                .fields
                .first()
                .cloned()
                .ok_or_else(|| "Config defines no fields".to_string())?
        };

        Ok(StartupConfig {
            field,
            keys: parse_key_script(&self.keys),
            json: self.json,
        })
    }
}

/// Conventional separator for a kind name; unknown kinds fail later, at build
fn default_separator_for(kind: &str) -> char {
    match kind {
        "currency" => ',',
        _ => '-',
    }
}

/// Expand script arguments into keys.
///
/// An argument naming a key becomes that key; anything else is typed one
/// character at a time.
pub fn parse_key_script<S: AsRef<str>>(args: &[S]) -> Vec<Key> {
    args.iter()
        .flat_map(|arg| match Key::from_name(arg.as_ref()) {
            Key::Unidentified => arg.as_ref().chars().map(Key::Char).collect(),
            key => vec![key],
        })
        .collect()
}

/// Render text with a `|` at the caret
pub fn render_caret(text: &str, cursor: Option<usize>) -> String {
    let Some(cursor) = cursor else {
        return text.to_string();
    };
    let mut out = String::with_capacity(text.len() + 1);
    let mut placed = false;
    for (i, ch) in text.chars().enumerate() {
        if i == cursor {
            out.push('|');
            placed = true;
        }
        out.push(ch);
    }
    if !placed {
        out.push('|');
    }
    out
}
