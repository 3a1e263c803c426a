use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdPointsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV serialization error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("GeoJSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PartialEq for EdPointsError {
    fn eq(&self, other: &Self) -> bool {
        use EdPointsError::*;
        match (self, other) {
            (InvalidArgument(a), InvalidArgument(b)) => a == b,
            (TypeMismatch(a), TypeMismatch(b)) => a == b,
            (
                DimensionMismatch {
                    expected: e1,
                    found: f1,
                },
                DimensionMismatch {
                    expected: e2,
                    found: f2,
                },
            ) => e1 == e2 && f1 == f2,

            // Not comparable: equal when the variant matches
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,
            (JsonError(_), JsonError(_)) => true,

            _ => false,
        }
    }
}
