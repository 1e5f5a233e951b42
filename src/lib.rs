pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;
pub use config::toml_config::PrefsFile;

pub use adapters::memory::InMemoryStore;
pub use core::selector::Selector;
pub use domain::model::{ContentItem, ItemId, OrderBy, OrderDirection, Preferences, PublishStatus};
pub use domain::ports::ContentStore;
pub use utils::error::{RelatedError, Result};
