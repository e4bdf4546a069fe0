use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::domain::FieldKindChoice;

/// Lexicon - console for schema-driven dictionaries and their records
#[derive(Parser, Debug, Clone)]
#[command(name = "lexicon", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "LEXICON_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Base URL of the schema service (e.g. http://localhost:5253/api)
    #[arg(long, env = "LEXICON_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "LEXICON_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Log level filter (e.g. "info", "lexicon=debug")
    #[arg(long, env = "LEXICON_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List dictionaries
    Dictionaries,
    /// Create a dictionary
    Create {
        name: String,
    },
    /// List the fields of a dictionary
    Fields {
        dictionary: String,
    },
    /// Add a field to a dictionary
    AddField {
        dictionary: String,
        field: String,
        /// Object, Array, String, Number, Integer, Boolean, Null or ref
        #[arg(long, default_value = "String")]
        kind: FieldKindChoice,
        /// Mark the field required (ignored for ref fields)
        #[arg(long)]
        required: bool,
        /// Target dictionary of a ref field
        #[arg(long)]
        target: Option<String>,
    },
    /// Print the record table of a dictionary
    Show {
        dictionary: String,
    },
    /// Interactive session: open dictionaries and enter records
    Shell,
}

impl Cli {
    /// Check if any connection setting is given on the command line or via env
    pub fn has_service_overrides(&self) -> bool {
        self.base_url.is_some() || self.timeout.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PrimitiveKind;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["lexicon", "dictionaries"]);
        assert_eq!(cli.config, PathBuf::from("lexicon.toml"));
        assert!(cli.base_url.is_none());
        assert!(cli.timeout.is_none());
        assert_eq!(cli.command, Command::Dictionaries);
        assert!(!cli.has_service_overrides());
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "lexicon",
            "--config",
            "custom.toml",
            "--base-url",
            "http://example:8080/api",
            "--timeout",
            "5",
            "add-field",
            "Order",
            "customer",
            "--kind",
            "ref",
            "--target",
            "Customer",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.base_url.as_deref(), Some("http://example:8080/api"));
        assert_eq!(cli.timeout, Some(5));
        assert!(cli.has_service_overrides());
        assert_eq!(
            cli.command,
            Command::AddField {
                dictionary: "Order".to_string(),
                field: "customer".to_string(),
                kind: FieldKindChoice::Ref,
                required: false,
                target: Some("Customer".to_string()),
            }
        );
    }

    #[test]
    fn test_add_field_default_kind() {
        let cli = Cli::parse_from(["lexicon", "add-field", "Item", "sku", "--required"]);
        match cli.command {
            Command::AddField { kind, required, .. } => {
                assert_eq!(kind, FieldKindChoice::Primitive(PrimitiveKind::String));
                assert!(required);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
