use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The terminal is owned by the TUI, so tracing output is routed into
/// the in-app log pane instead of stdout.
pub fn init_tui_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("reservas_trajes=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("reservas_trajes=info"))
    };

    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(filter)
        .init();

    // Adapter for dependencies still on the log crate.
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);
}
