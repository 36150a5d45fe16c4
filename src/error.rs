use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresentError {
    #[error("Failed to write results")]
    Io(#[source] std::io::Error),

    #[error("Failed to serialize results")]
    Serialize(#[source] serde_yaml::Error),
}
