use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PedigreeError {
    #[error("Pedigree does not contain any individual")]
    EmptyPedigree,

    #[error("Individual '{0}' is defined more than once")]
    DuplicatePerson(String),

    #[error("Individual '{0}' must either have both parents defined, or none")]
    HalfParentage(String),

    #[error("Parent '{parent}' of individual '{person}' is not defined within the pedigree")]
    UnknownParent{person: String, parent: String},

    #[error("Individual '{person}' uses '{parent}' as both mother and father")]
    SameParents{person: String, parent: String},

    #[error("Individual '{0}' is listed among its own ancestors")]
    CyclicAncestry(String),
}
