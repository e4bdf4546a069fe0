//! Environment layering. Kept in its own test binary: the variables are
//! process-wide and would leak into the file-only config tests.

use clap::Parser;
use lexicon::cli::Cli;
use lexicon::config::Settings;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_env_overrides_file_and_cli_overrides_env() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("lexicon.toml");
    fs::write(
        &path,
        "[service]\nbase_url = \"http://from-file/api\"\ntimeout_seconds = 5\n",
    )?;

    std::env::set_var("LEXICON_SERVICE__BASE_URL", "http://from-env/api");
    std::env::set_var("LEXICON_LOGGING__LEVEL", "warn");

    let settings = Settings::from_file(&path)?;
    assert_eq!(settings.service.base_url, "http://from-env/api");
    assert_eq!(settings.service.timeout_seconds, 5);
    assert_eq!(settings.logging.level, "warn");

    let config = path.to_string_lossy().to_string();
    let cli = Cli::parse_from([
        "lexicon",
        "--config",
        config.as_str(),
        "--base-url",
        "http://from-cli/api",
        "dictionaries",
    ]);
    let settings = Settings::new_with_cli(&cli)?;
    assert_eq!(settings.service.base_url, "http://from-cli/api");
    assert_eq!(settings.logging.level, "warn");

    std::env::remove_var("LEXICON_SERVICE__BASE_URL");
    std::env::remove_var("LEXICON_LOGGING__LEVEL");
    Ok(())
}
