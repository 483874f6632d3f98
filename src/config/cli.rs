use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "reservas-trajes")]
#[command(about = "Inventory and booking tracker for a costume-rental store")]
pub struct CliConfig {
    /// Base URL of the reservation store
    #[arg(long)]
    pub base_url: Option<String>,

    /// Optional TOML configuration file; explicit flags win over it
    #[arg(long)]
    pub config: Option<String>,

    /// Initial date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Terminal poll interval in milliseconds
    #[arg(long)]
    pub tick_rate_ms: Option<u64>,

    #[arg(long, help = "Enable verbose logging in the log pane")]
    pub verbose: bool,
}
