use super::domain::{Buyer, Neighborhood, NeighborhoodRoster};
use super::AllocationError;

/// Dot product of the buyer's goals against the neighborhood's scores, taken
/// over the buyer's goal attributes only.
///
/// Each product of two `i64` weights fits in an `i128`; only the running sum
/// can exceed it, which is reported as `ScoreOverflow`.
pub fn fit(buyer: &Buyer, neighborhood: &Neighborhood) -> Result<i128, AllocationError> {
    buyer
        .goals
        .iter()
        .try_fold(0i128, |total, (attribute, goal)| {
            let product = i128::from(goal) * i128::from(neighborhood.scores.get(attribute));
            total.checked_add(product)
        })
        .ok_or_else(|| AllocationError::ScoreOverflow {
            buyer: buyer.name.clone(),
            neighborhood: neighborhood.name.clone(),
        })
}

/// Fit against the buyer's first choice, whatever they are finally placed in.
pub fn preferred_fit(
    buyer: &Buyer,
    roster: &NeighborhoodRoster,
) -> Result<i128, AllocationError> {
    let first_choice = buyer
        .first_choice()
        .ok_or_else(|| AllocationError::EmptyPreferences {
            buyer: buyer.name.clone(),
        })?;

    let neighborhood =
        roster
            .get(first_choice)
            .ok_or_else(|| AllocationError::UnknownNeighborhood {
                buyer: buyer.name.clone(),
                neighborhood: first_choice.to_string(),
            })?;

    fit(buyer, neighborhood)
}
