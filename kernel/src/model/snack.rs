use crate::model::id::SnackId;

/// Catalog entry for a pre-orderable snack. Static, read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snack {
    pub id: SnackId,
    pub name: String,
    /// Unit price in the smallest currency unit.
    pub price: u32,
    pub icon: Option<String>,
}
