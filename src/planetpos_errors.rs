use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanetPosError {
    #[error("Invalid Kepler solver parameter: {0}")]
    InvalidSolverParameter(String),

    #[error("Unknown solar system body: {0}")]
    UnknownBody(String),

    #[error("Unknown orbital element set: {0}")]
    UnknownElementSet(String),

    #[error("Body {body} is not provided by element source {source_name}")]
    BodyNotInElementSet { body: String, source_name: String },

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] hifitime::HifitimeError),

    #[error("Error while reading the element table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    Io(#[from] std::io::Error),
}

impl PartialEq for PlanetPosError {
    fn eq(&self, other: &Self) -> bool {
        use PlanetPosError::*;
        match (self, other) {
            (InvalidSolverParameter(a), InvalidSolverParameter(b)) => a == b,
            (UnknownBody(a), UnknownBody(b)) => a == b,
            (UnknownElementSet(a), UnknownElementSet(b)) => a == b,
            (
                BodyNotInElementSet {
                    body: a,
                    source_name: sa,
                },
                BodyNotInElementSet {
                    body: b,
                    source_name: sb,
                },
            ) => a == b && sa == sb,

            // payloads are not comparable, only the variant is
            (InvalidDate(_), InvalidDate(_)) => true,
            (Csv(_), Csv(_)) => true,
            (Io(_), Io(_)) => true,

            _ => false,
        }
    }
}
