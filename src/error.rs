use thiserror::Error;

#[derive(Error, Debug)]
pub enum PedigreeError {
    #[error("Unknown member '{0}'")]
    UnknownMember(String),

    #[error("Member '{0}' is already registered")]
    DuplicateMember(String),

    #[error("Parentage cycle detected at member '{0}'")]
    GraphCycle(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Genotype probabilities of '{0}' cannot be renormalized (zero total)")]
    InvalidProbabilityState(String),

    #[error("Malformed pattern: {0}")]
    MalformedPattern(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PedigreeError>;
