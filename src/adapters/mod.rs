// Adapters layer: concrete ContentStore implementations. Only the in-memory
// fixture-backed store ships here; a database-backed store would be a sibling.

pub mod memory;
