//! Translation unit id generation.
use uuid::Uuid;

/// Generates unit ids unique within and across output documents.
///
/// Ids are a configurable prefix followed by a UUIDv4 in simple form,
/// so a single generator can be shared by a whole pipeline run
/// without any bookkeeping.
#[derive(Debug, Clone)]
pub struct UnitIdGenerator {
    prefix: String,
}

impl UnitIdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Get a fresh unit id.
    pub fn generate(&self) -> String {
        format!("{}{}", self.prefix, Uuid::new_v4().simple())
    }
}

impl Default for UnitIdGenerator {
    fn default() -> Self {
        Self::new("unit-")
    }
}
