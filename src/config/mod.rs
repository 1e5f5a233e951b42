pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "related-posts")]
#[command(about = "Rank related content items from a fixture store")]
pub struct CliArgs {
    /// JSON fixture holding the content items
    #[arg(long, default_value = "./fixtures/items.json")]
    pub store: String,

    /// TOML file with the selection preferences
    #[arg(long, default_value = "./fixtures/prefs.toml")]
    pub prefs: String,

    /// Id of the item to find related content for; omit for a sourceless run
    #[arg(long)]
    pub source_id: Option<i64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
