//! Completed user input record

/// Default GCP region offered by the input layer
pub const DEFAULT_REGION: &str = "asia-northeast1";

/// Default prefix prepended to generated view names
pub const DEFAULT_VIEW_PREFIX: &str = "filtered_";

/// One requested output dataset.
///
/// The first spec in a [`UserInputRecord`] is the mandatory primary dataset
/// (its key usually defaults to the client-name-derived key); further specs
/// are optional extras the user opted into.
#[derive(Debug, Clone)]
pub struct OutputDatasetSpec {
    pub key: String,
    /// How many months of history the views cover; the assembler applies
    /// the default when unset.
    pub months_back: Option<u32>,
}

impl OutputDatasetSpec {
    pub fn new(key: impl Into<String>) -> Self {
        OutputDatasetSpec {
            key: key.into(),
            months_back: None,
        }
    }
}

/// Everything the input layer collects, already validated and complete.
///
/// The core performs no validation of its own; an incomplete record is a
/// precondition violation of the excluded input-collection layer.
#[derive(Debug, Clone)]
pub struct UserInputRecord {
    pub project_id: String,
    pub region: String,
    pub view_prefix: String,
    /// Client name as entered; used for labels, descriptions, and to derive
    /// the primary dataset key.
    pub client_name: String,
    pub output_datasets: Vec<OutputDatasetSpec>,
}
