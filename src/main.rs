use brew_scrape::core::render;
use brew_scrape::utils::{logger, validation::Validate};
use brew_scrape::{
    CliConfig, Command, EtlEngine, LocalStorage, ScrapeError, ScrapeSettings, VenuePipeline,
};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("❌ {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = if e.is_fetch_error() { 2 } else { 1 };
        std::process::exit(exit_code);
    }
}

async fn run(cli: CliConfig) -> Result<(), ScrapeError> {
    let settings = cli.settings()?;
    settings.validate()?;

    match &cli.command {
        Command::Venues => {
            for name in settings.venues.names() {
                println!("{}", name);
            }
            Ok(())
        }
        Command::Menu { venue } => {
            let result = scrape(&settings, venue).await?;
            print!("{}", render::menu_text(&result.menus));
            Ok(())
        }
        Command::Leaderboard { venue } => {
            let result = scrape(&settings, venue).await?;
            print!("{}", render::leaderboard_text(venue, &result.patrons));
            Ok(())
        }
    }
}

async fn scrape(
    settings: &ScrapeSettings,
    venue: &str,
) -> Result<brew_scrape::ScrapeResult, ScrapeError> {
    let (venue, venue_path) = settings.venues.resolve_entry(venue)?;
    tracing::info!("Scraping {} ({})", venue, venue_path);

    let storage = LocalStorage::new(settings.output_path.clone().unwrap_or_default());
    let pipeline = VenuePipeline::new(storage, settings.clone(), venue, venue_path)?;

    let outcome = EtlEngine::new(pipeline).run().await?;
    if let Some(path) = &outcome.output_path {
        eprintln!("📁 Output saved to: {}", path);
    }

    Ok(outcome.result)
}
