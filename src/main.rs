use clap::Parser;
use dog_breeds::core::report;
use dog_breeds::utils::{logger, validation::Validate};
use dog_breeds::{AppError, BreedQuery, BreedResolver, CliConfig, Settings};

fn load_settings(cli: &CliConfig) -> Result<Settings, AppError> {
    let settings = cli.settings()?;
    settings.validate()?;
    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    }

    tracing::debug!("Effective settings: {:?}", settings);

    let resolver = match BreedResolver::from_config(&settings) {
        Ok(resolver) => resolver,
        Err(e) => {
            tracing::error!("❌ Failed to build resolver: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let breeds: Vec<BreedQuery> = cli.breeds.iter().cloned().map(BreedQuery::from).collect();
    let outcomes = report::resolve_each(&resolver, &breeds).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report::render_json(&outcomes))?);
    } else {
        println!("{}", report::render_text(&outcomes));
    }

    let failed = report::failures(&outcomes);
    if let Some(first) = failed.first() {
        for e in &failed {
            tracing::error!("❌ {}", e.user_friendly_message());
        }
        tracing::error!("{} of {} breeds could not be resolved", failed.len(), outcomes.len());
        eprintln!("💡 {}", first.recovery_suggestion());
        std::process::exit(2);
    }

    Ok(())
}
