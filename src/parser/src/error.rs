use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError{
    #[error("File {0} does not exist")]
    MissingFile(String),

    #[error("{0} is not a file")]
    NotAFile(String),

    #[error("The provided value must lie between {0} and {1}")]
    ParseRatio(f64, f64),

    #[error("--{0} must be greater than 0")]
    NonPositive(&'static str),

    #[error("Failed to serialize command line arguments")]
    Serialize(#[source] serde_yaml::Error),
}
