use std::fmt;

/// Precondition violations detected before any text is produced
#[derive(Debug, PartialEq, Eq)]
pub enum RenderError {
    /// A required scalar field is empty
    MissingField(&'static str),
    /// The config has no output datasets; the primary one is mandatory
    NoOutputDatasets,
    /// months_back must be positive
    InvalidMonthsBack { dataset: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingField(field) => {
                write!(f, "Required field '{}' is empty", field)
            }
            RenderError::NoOutputDatasets => {
                write!(f, "Config must contain at least one output dataset")
            }
            RenderError::InvalidMonthsBack { dataset } => {
                write!(f, "Output dataset '{}' has months_back = 0", dataset)
            }
        }
    }
}

impl std::error::Error for RenderError {}
