//! Shared pedigree fixtures, and their exact posteriors under the default model parameters.

use float_cmp::approx_eq;
use pedigree::{Pedigree, PedigreeBuilder};

use crate::{GeneCount, Posterior};

/// (name, P(gene = [0, 1, 2]), P(trait = [false, true]))
pub type Expected = (&'static str, [f64; 3], [f64; 2]);

pub const EPSILON: f64 = 1e-9;

pub const HARRY_WITH_TRAIT: [f64; 3] = [0.2917933130699088, 0.5106382978723405, 0.1975683890577508];

pub const FAMILY0: [Expected; 3] = [
    ("Harry", [0.5351186101461487, 0.45569827010782393, 0.009183119746027273], [0.7334887548032394, 0.2665112451967606]),
    ("James", [0.2917933130699088, 0.5106382978723405, 0.1975683890577508], [0.0, 1.0]),
    ("Lily",  [0.9827318788129458, 0.01364905387240202, 0.0036190673146520524], [1.0, 0.0]),
];

pub const FAMILY1: [Expected; 6] = [
    ("Arthur",  [0.8822557906195729, 0.08945989717461476, 0.0282843122058123], [1.0, 0.0]),
    ("Charlie", [0.8025275713740458, 0.19438737161822103, 0.0030850570077329957], [1.0, 0.0]),
    ("Fred",    [0.29179201861755805, 0.6995517237283336, 0.008656257654108244], [0.0, 1.0]),
    ("Ginny",   [0.7403108724416242, 0.25523256402577865, 0.0044565635325972], [0.84676988912496, 0.15323011087504002]),
    ("Molly",   [0.7260015723102055, 0.1957688645352713, 0.07822956315452322], [0.8322602040867064, 0.16773979591329363]),
    ("Ron",     [0.7403108724416242, 0.25523256402577865, 0.0044565635325972], [0.84676988912496, 0.15323011087504002]),
];

pub const FAMILY2: [Expected; 5] = [
    ("Arthur",   [0.9508921068435471, 0.034378619382456885, 0.014729273773996073], [1.0, 0.0]),
    ("Hermione", [0.8189409890072215, 0.12028656319379957, 0.06077244779897897], [1.0, 0.0]),
    ("Molly",    [0.8851705602229739, 0.07442997986760919, 0.04039945990941678], [0.9232078567307881, 0.07679214326921191]),
    ("Ron",      [0.7808016862979836, 0.21492683665074408, 0.0042714770512722764], [1.0, 0.0]),
    ("Rose",     [0.2890184629944206, 0.7021623393317314, 0.008819197673848027], [0.0, 1.0]),
];

/// A lone founder named "Harry".
pub fn single(observed_trait: Option<bool>) -> Pedigree {
    let mut builder = PedigreeBuilder::new();
    builder.add_person("Harry", None, observed_trait).expect("Valid person");
    builder.build().expect("Valid pedigree")
}

/// Harry, child of Lily and James. James exhibits the trait, Lily does not.
pub fn family0() -> Pedigree {
    let mut builder = PedigreeBuilder::new();
    builder.add_person("Harry", Some(("Lily", "James")), None).expect("Harry");
    builder.add_person("James", None, Some(true)).expect("James");
    builder.add_person("Lily",  None, Some(false)).expect("Lily");
    builder.build().expect("Valid pedigree")
}

/// Four children of Molly and Arthur. Only Fred is known to exhibit the trait.
pub fn family1() -> Pedigree {
    let mut builder = PedigreeBuilder::new();
    builder.add_person("Arthur",  None, Some(false)).expect("Arthur");
    builder.add_person("Charlie", Some(("Molly", "Arthur")), Some(false)).expect("Charlie");
    builder.add_person("Fred",    Some(("Molly", "Arthur")), Some(true)).expect("Fred");
    builder.add_person("Ginny",   Some(("Molly", "Arthur")), None).expect("Ginny");
    builder.add_person("Molly",   None, None).expect("Molly");
    builder.add_person("Ron",     Some(("Molly", "Arthur")), None).expect("Ron");
    builder.build().expect("Valid pedigree")
}

/// Three generations: Rose, daughter of Ron and Hermione, exhibits the trait.
pub fn family2() -> Pedigree {
    let mut builder = PedigreeBuilder::new();
    builder.add_person("Arthur",   None, Some(false)).expect("Arthur");
    builder.add_person("Hermione", None, Some(false)).expect("Hermione");
    builder.add_person("Molly",    None, None).expect("Molly");
    builder.add_person("Ron",      Some(("Molly", "Arthur")), Some(false)).expect("Ron");
    builder.add_person("Rose",     Some(("Ron", "Hermione")), Some(true)).expect("Rose");
    builder.build().expect("Valid pedigree")
}

pub fn assert_person(posterior: &Posterior, name: &str, genes: [f64; 3], traits: [f64; 2]) {
    let person = posterior.get(name).unwrap_or_else(|| panic!("Missing posterior for {name}"));
    for gene in GeneCount::ALL {
        let (got, want) = (person.genes().get(gene), genes[gene.index()]);
        assert!(approx_eq!(f64, got, want, epsilon = EPSILON), "{name} - P(gene = {gene}): got {got}, expected {want}");
    }
    for (has_trait, want) in [(false, traits[0]), (true, traits[1])] {
        let got = person.traits().get(has_trait);
        assert!(approx_eq!(f64, got, want, epsilon = EPSILON), "{name} - P(trait = {has_trait}): got {got}, expected {want}");
    }
}
