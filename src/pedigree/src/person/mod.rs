use std::fmt::{self, Display, Formatter};

/// Space padding length of `self.name`, used for `std::fmt::Display`
const NAME_DISPLAY_LEN   : usize = 10;
const PARENTS_DISPLAY_LEN: usize = 15;

/// Resolved parents of a `Person`, stored as indices within the owning `Pedigree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parents {
    pub mother: usize,
    pub father: usize,
}

impl Parents {
    pub fn new(mother: usize, father: usize) -> Self {
        Self{mother, father}
    }
}

/// A member of the pedigree.
/// # Fields:
/// - `name`          : unique identifier of the individual (e.g. 'Harry')
/// - `parents`       : `None` for founders, `Some(Parents)` when both parents are known.
/// - `observed_trait`: `Some(true|false)` when the trait was observed, `None` if unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name          : String,
    parents       : Option<Parents>,
    observed_trait: Option<bool>,
}

impl Person {
    pub(crate) fn new(name: &str, parents: Option<Parents>, observed_trait: Option<bool>) -> Self {
        Self{name: name.to_string(), parents, observed_trait}
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parents(&self) -> Option<Parents> {
        self.parents
    }

    pub fn observed_trait(&self) -> Option<bool> {
        self.observed_trait
    }

    #[inline(always)]
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let parents = match self.parents {
            Some(Parents{mother, father}) => format!("{mother} <-> {father}"),
            None                          => "None".to_string(),
        };
        let observed = match self.observed_trait {
            Some(true)  => "1",
            Some(false) => "0",
            None        => "?",
        };
        write!(f, "{: <NAME_DISPLAY_LEN$} - parents: {: <PARENTS_DISPLAY_LEN$} - trait: {observed}", self.name, parents)
    }
}
