use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("No world is consistent with the observed traits: the distributions of '{person}' sum to zero")]
    ImpossibleEvidence{person: String},

    #[error("Enumerating {worlds} worlds exceeds the requested limit of {limit}")]
    TooManyWorlds{worlds: u128, limit: u64},

    #[error("Cannot enumerate the worlds of {people} individuals. Exhaustive enumeration is limited to {max} individuals")]
    PopulationTooLarge{people: usize, max: usize},

    #[error("Failed to instantiate threadpool")]
    BuildThreadPool(#[source] rayon::ThreadPoolBuildError),
}
