/// Default prefix for a synthesized identifier column name.
pub const DEFAULT_ID_PREFIX: &str = "ID-";

/// Knobs for parsing a report.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Prefix for the synthesized id column; a number is appended.
    pub id_prefix: String,
    /// Align rows on the rayon pool. Output order is unchanged.
    pub parallel: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            parallel: false,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }
}
