use clap::Parser;
use lexicon::adapters::HttpSchemaClient;
use lexicon::application::{Console, Outcome};
use lexicon::cli::{Cli, Command};
use lexicon::config::Settings;
use lexicon::domain::{FieldDraft, ServiceResult};
use lexicon::shell::Shell;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new_with_cli(&cli)?;

    // Initialize tracing; RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.has_service_overrides() {
        debug!("Service settings overridden from the command line");
    }
    info!(base_url = %settings.service.base_url, "Using schema service");

    let service = Arc::new(HttpSchemaClient::new(
        &settings.service.base_url,
        settings.timeout(),
    )?);
    let mut console = Console::new(service);

    match cli.command {
        Command::Dictionaries => {
            exit_on_error(console.reload_dictionaries().await)?;
            for name in console.workspace().dictionaries() {
                println!("{}", name);
            }
        }
        Command::Create { name } => {
            if exit_on_error(console.create_dictionary(&name).await)? == Outcome::Skipped {
                anyhow::bail!("dictionary name must not be blank");
            }
            println!("created {}", name.trim());
        }
        Command::Fields { dictionary } => {
            exit_on_error(console.reload_properties(&dictionary).await)?;
            for name in console.workspace().properties_of(&dictionary) {
                println!("{}", name);
            }
        }
        Command::AddField {
            dictionary,
            field,
            kind,
            required,
            target,
        } => {
            let mut draft = FieldDraft::new(field, kind).required(required);
            if let Some(target) = target {
                draft = draft.target(target);
            }
            if exit_on_error(console.add_field(&dictionary, &draft).await)? == Outcome::Skipped {
                anyhow::bail!("field name must not be blank and ref fields need --target");
            }
            for name in console.workspace().properties_of(&dictionary) {
                println!("{}", name);
            }
        }
        Command::Show { dictionary } => {
            exit_on_error(console.open_dictionary(&dictionary).await)?;
            if let Some(table) = console.workspace().table() {
                print!("{}", table);
            }
        }
        Command::Shell => {
            let mut shell = Shell::new(console);
            let stdin = BufReader::new(tokio::io::stdin());
            shell.run(stdin, &mut std::io::stdout()).await?;
        }
    }

    Ok(())
}

/// One-shot commands report service failures through the exit status
fn exit_on_error(result: ServiceResult<Outcome>) -> anyhow::Result<Outcome> {
    result.map_err(|e| anyhow::anyhow!(e))
}
