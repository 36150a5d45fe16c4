mod person;
pub use person::{Person, Parents};

mod pedigree;
pub use pedigree::Pedigree;

mod builder;
pub use builder::PedigreeBuilder;

pub mod loader;
pub use loader::pedigree_parser;

mod error;
pub use error::PedigreeError;
