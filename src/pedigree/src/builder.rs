use indexmap::IndexMap;
use log::trace;

use located_error::prelude::*;

use crate::{Parents, Pedigree, PedigreeError, Person};

/// Unvalidated person record: parents are still referenced by name.
#[derive(Debug, Clone)]
struct PersonRecord {
    parents       : Option<(String, String)>,
    observed_trait: Option<bool>,
}

/// Depth-first search marks, used to detect individuals that are their own ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {Unvisited, InProgress, Done}

/// Collect person records, then validate and resolve them into a `Pedigree`.
///
/// Parent references may point to individuals that are added later on: resolution only happens
/// within `build()`.
#[derive(Debug, Clone, Default)]
pub struct PedigreeBuilder {
    records: IndexMap<String, PersonRecord>,
}

impl PedigreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new individual.
    /// # Arguments:
    /// - `name`          : unique name of the individual.
    /// - `parents`       : `Some((mother, father))`, or `None` if the individual is a founder.
    /// - `observed_trait`: observed trait value, or `None` if unknown.
    ///
    /// # Errors:
    /// - `PedigreeError::DuplicatePerson` if `name` was already registered.
    pub fn add_person(&mut self, name: &str, parents: Option<(&str, &str)>, observed_trait: Option<bool>) -> Result<(), PedigreeError> {
        if self.records.contains_key(name) {
            return Err(PedigreeError::DuplicatePerson(name.to_string()))
        }
        let parents = parents.map(|(mother, father)| (mother.to_string(), father.to_string()));
        self.records.insert(name.to_string(), PersonRecord{parents, observed_trait});
        Ok(())
    }

    /// Register a new individual from optional, independent mother and father fields.
    ///
    /// # Errors:
    /// - `PedigreeError::HalfParentage` if exactly one of `mother`, `father` is provided.
    /// - `PedigreeError::DuplicatePerson` if `name` was already registered.
    pub fn add_record(&mut self, name: &str, mother: Option<&str>, father: Option<&str>, observed_trait: Option<bool>) -> Result<(), PedigreeError> {
        let parents = match (mother, father) {
            (Some(mother), Some(father)) => Some((mother, father)),
            (None, None)                 => None,
            _                            => return Err(PedigreeError::HalfParentage(name.to_string())),
        };
        self.add_person(name, parents, observed_trait)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve every parent reference and return a validated `Pedigree`.
    ///
    /// # Errors:
    /// - `EmptyPedigree` if no individual was registered.
    /// - `UnknownParent` if a parent name does not match any registered individual.
    /// - `SameParents` if a single individual is used as both mother and father.
    /// - `CyclicAncestry` if an individual is found among its own ancestors.
    pub fn build(&self) -> Result<Pedigree> {
        use PedigreeError::{CyclicAncestry, EmptyPedigree, SameParents};
        let loc_msg = "While validating pedigree records";
        if self.records.is_empty() {
            return Err(EmptyPedigree).loc(loc_msg)
        }

        // ---- Resolve parent names into pedigree indices.
        let mut people = IndexMap::with_capacity(self.records.len());
        for (name, record) in &self.records {
            let parents = match &record.parents {
                None => None,
                Some((mother, father)) => {
                    if mother == father {
                        return Err(SameParents{person: name.clone(), parent: mother.clone()}).loc(loc_msg)
                    }
                    Some(Parents::new(self.resolve(name, mother).loc(loc_msg)?, self.resolve(name, father).loc(loc_msg)?))
                }
            };
            trace!("Resolved {name}: parents {parents:?} - trait: {:?}", record.observed_trait);
            people.insert(name.clone(), Person::new(name, parents, record.observed_trait));
        }

        // ---- Ensure the pedigree is acyclic.
        let parents: Vec<Option<Parents>> = people.values().map(Person::parents).collect();
        let mut marks = vec![Mark::Unvisited; parents.len()];
        for i in 0..parents.len() {
            if let Err(culprit) = Self::visit(i, &parents, &mut marks) {
                let name = people.get_index(culprit).map(|(name, _)| name.clone()).unwrap_or_default();
                return Err(CyclicAncestry(name)).loc(loc_msg)
            }
        }

        Ok(Pedigree::new(people))
    }

    fn resolve(&self, person: &str, parent: &str) -> Result<usize, PedigreeError> {
        self.records.get_index_of(parent).ok_or_else(|| PedigreeError::UnknownParent{
            person: person.to_string(),
            parent: parent.to_string()
        })
    }

    /// Walk up the ancestry of individual `start`, using an explicit work stack. Returns the index
    /// of the first individual found within its own ancestry, if any.
    ///
    /// Individuals marked `InProgress` are exactly the ones along the lineage currently explored.
    fn visit(start: usize, parents: &[Option<Parents>], marks: &mut [Mark]) -> Result<(), usize> {
        // (individual, whether its parents were already pushed)
        let mut stack = vec![(start, false)];
        while let Some((i, expanded)) = stack.pop() {
            if expanded {
                marks[i] = Mark::Done;
                continue
            }
            match marks[i] {
                Mark::Done       => continue,
                Mark::InProgress => return Err(i),
                Mark::Unvisited  => {
                    marks[i] = Mark::InProgress;
                    stack.push((i, true));
                    if let Some(Parents{mother, father}) = parents[i] {
                        stack.push((father, false));
                        stack.push((mother, false));
                    }
                }
            }
        }
        Ok(())
    }
}
