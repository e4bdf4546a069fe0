use clap::Parser;
use lexicon::cli::Cli;
use lexicon::config::Settings;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_settings_from_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("lexicon.toml");

    let lexicon_toml = r#"
[service]
base_url = "https://dictionaries.internal/api"
timeout_seconds = 5

[logging]
level = "lexicon=debug"
"#;
    fs::write(&path, lexicon_toml)?;

    let settings = Settings::from_file(&path)?;
    assert_eq!(settings.service.base_url, "https://dictionaries.internal/api");
    assert_eq!(settings.timeout(), Duration::from_secs(5));
    assert_eq!(settings.logging.level, "lexicon=debug");

    Ok(())
}

#[test]
fn test_partial_file_keeps_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("lexicon.toml");
    fs::write(&path, "[service]\ntimeout_seconds = 12\n")?;

    let settings = Settings::from_file(&path)?;
    assert_eq!(settings.service.base_url, "http://localhost:5253/api");
    assert_eq!(settings.service.timeout_seconds, 12);
    assert_eq!(settings.logging.level, "info");

    Ok(())
}

#[test]
fn test_missing_file_uses_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = Settings::from_file(&temp_dir.path().join("absent.toml"))?;

    assert_eq!(settings.service.base_url, "http://localhost:5253/api");
    assert_eq!(settings.service.timeout_seconds, 30);
    assert!(settings.validate().is_ok());

    Ok(())
}

#[test]
fn test_cli_overrides_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("lexicon.toml");
    fs::write(&path, "[service]\nbase_url = \"http://from-file/api\"\n")?;

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

    Ok(())
}

#[test]
fn test_invalid_file_values_are_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("lexicon.toml");
    fs::write(
        &path,
        "[service]\nbase_url = \"localhost:5253\"\ntimeout_seconds = 0\n",
    )?;

    let config = path.to_string_lossy().to_string();
    let cli = Cli::parse_from(["lexicon", "--config", config.as_str(), "shell"]);
    let err = Settings::new_with_cli(&cli).unwrap_err().to_string();
    assert!(err.contains("service.base_url"));
    assert!(err.contains("service.timeout_seconds"));

    Ok(())
}
