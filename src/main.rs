use clap::Parser;
use reservas_trajes::utils::{logger, validation::Validate};
use reservas_trajes::{app, AppSettings, CliConfig, HttpStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match AppSettings::resolve(cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    if let Err(e) = settings.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    logger::init_tui_logger(settings.verbose);
    tracing::info!(base_url = %settings.base_url, date = %settings.date, "starting reservas-trajes");

    let store = Arc::new(HttpStore::new(&settings.base_url)?);
    app::run(store, settings).await
}
