use crate::model::id::GameSlug;

/// Catalog entry for a playable title. Defined once at startup and never
/// mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub slug: GameSlug,
    pub title: String,
    /// Platform label, an open set ("PC", "PS5", "Xbox", "Multi", ...).
    pub platform: String,
    /// Informational per-title rate; sessions are billed at the flat
    /// hourly rate, not this value.
    pub price_per_hour: u32,
    pub description: Option<String>,
}
