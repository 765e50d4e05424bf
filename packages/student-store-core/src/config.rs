//! Store configuration.

/// Student store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Length of generated student identifiers (minimum 8)
    pub id_length: usize,
    /// Enforce value types and the closed field set on updates
    pub strict_update_validation: bool,
    /// Report an empty subject list as an error instead of returning it
    pub empty_subjects_as_error: bool,
    /// Initial collection capacity in records
    pub initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            id_length: 16,
            strict_update_validation: false,
            empty_subjects_as_error: true,
            initial_capacity: 64,
        }
    }
}

impl StoreConfig {
    /// Shortest identifier the store will generate.
    pub const MIN_ID_LENGTH: usize = 8;

    /// Identifier length clamped to the supported minimum.
    pub fn effective_id_length(&self) -> usize {
        self.id_length.max(Self::MIN_ID_LENGTH)
    }
}
