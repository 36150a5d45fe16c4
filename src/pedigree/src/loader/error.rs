use thiserror::Error;

use crate::PedigreeError;
use super::Column;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to open pedigree definition file: {0}")]
    OpenFile(#[source] std::io::Error),

    #[error("Encountered IO error when reading line n°{lineno} of the pedigree definition file: {source}")]
    IoError{source: std::io::Error, lineno: usize},

    #[error("Pedigree definition file does not contain any header line")]
    MissingHeader,

    #[error("Invalid header within the pedigree definition file: missing the '{0}' column")]
    MissingColumn(Column),

    #[error("Duplicate '{0}' column within the header of the pedigree definition file")]
    DuplicateColumn(Column),

    #[error("Expected {expected} fields at line n°{lineno}. Got {got}")]
    FieldCount{lineno: usize, expected: usize, got: usize},

    #[error("Empty individual name at line n°{0}")]
    EmptyName(usize),

    #[error("Invalid trait value '{value}' at line n°{lineno}. Expected '1', '0' or an empty field")]
    InvalidTrait{value: String, lineno: usize},

    #[error("Failed to add individual at line n°{lineno}")]
    AddPerson{source: PedigreeError, lineno: usize},
}
