use log::trace;

use located_error::prelude::*;
use pedigree::Pedigree;

use crate::{Accumulator, InferenceError, PersonPosterior, Posterior};

/// Rescale `masses` so that they sum to one. Returns `None` if the total mass is zero.
fn rescale(masses: &mut [f64]) -> Option<()> {
    let total: f64 = masses.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return None
    }
    masses.iter_mut().for_each(|mass| *mass /= total);
    Some(())
}

/// Turn accumulated, unnormalized marginals into posterior distributions.
///
/// The gene and trait distributions of each individual are normalized independently: both are
/// marginals of the same joint distribution, and each sums over the full support of its variable.
///
/// # Errors
/// - `InferenceError::ImpossibleEvidence` if any distribution sums to zero, i.e. no enumerated
///   world is consistent with the observed traits.
pub fn normalize(accumulator: Accumulator, pedigree: &Pedigree) -> Result<Posterior> {
    let (genes, traits) = accumulator.into_parts();
    let people = pedigree.iter().zip(genes).zip(traits)
        .map(|((person, mut genes), mut traits)| {
            let impossible = || InferenceError::ImpossibleEvidence{person: person.name().to_string()};
            let loc_msg = || format!("While normalizing the posterior of {}", person.name());
            rescale(genes.masses_mut()).ok_or_else(impossible).with_loc(loc_msg)?;
            rescale(traits.masses_mut()).ok_or_else(impossible).with_loc(loc_msg)?;
            trace!("Posterior of {}: genes {genes:?} - traits {traits:?}", person.name());
            Ok(PersonPosterior::new(person.name(), genes, traits))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Posterior::new(people))
}
