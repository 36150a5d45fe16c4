use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;

use crate::Person;

/// A validated population of individuals.
///
/// Individuals keep their insertion order: the index of a `Person` within the pedigree is the
/// index used by `Parents`, and by every per-person slice handled by downstream inference.
/// Instances are only ever obtained through `PedigreeBuilder::build()`, which guarantees that
/// every parent reference resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pedigree {
    people: IndexMap<String, Person>,
}

impl Pedigree {
    pub(crate) fn new(people: IndexMap<String, Person>) -> Self {
        Self{people}
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Retrieve a person using its pedigree index.
    pub fn get(&self, index: usize) -> Option<&Person> {
        self.people.get_index(index).map(|(_, person)| person)
    }

    /// Retrieve a person using its name.
    pub fn get_by_name(&self, name: &str) -> Option<&Person> {
        self.people.get(name)
    }

    /// Pedigree index of the individual called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.people.get_index_of(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.people.keys().map(String::as_str)
    }

    /// Indices of every individual whose trait was not observed.
    pub fn unknown_trait_indices(&self) -> Vec<usize> {
        self.iter()
            .enumerate()
            .filter(|(_, person)| person.observed_trait().is_none())
            .map(|(i, _)| i)
            .collect()
    }
}

impl Display for Pedigree {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.iter().enumerate().try_for_each(|(i, person)| writeln!(f, "{i: <3} - {person}"))
    }
}
