pub mod fallback;
pub mod matcher;
pub mod selector;

pub use crate::domain::model::{ContentItem, ItemId, Preferences};
pub use crate::domain::ports::ContentStore;
pub use crate::utils::error::Result;
