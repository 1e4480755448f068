use super::domain::{Buyer, NeighborhoodRoster};
use super::fit::{fit, preferred_fit};
use serde::Serialize;
use tracing::{debug, info};

/// Failures that abort an allocation run. Placements made before the failure
/// are left in place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("no neighborhoods to allocate buyers into")]
    NoNeighborhoods,
    #[error("buyer {buyer} prefers unknown neighborhood {neighborhood}")]
    UnknownNeighborhood { buyer: String, neighborhood: String },
    #[error("buyer {buyer} has no neighborhood preferences")]
    EmptyPreferences { buyer: String },
    #[error("fit of buyer {buyer} against {neighborhood} exceeds the score range")]
    ScoreOverflow { buyer: String, neighborhood: String },
}

/// Aggregate counts for a finished run. Unplaced buyers are counted, never named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllocationSummary {
    pub capacity: usize,
    pub buyers: usize,
    pub placed: usize,
    pub unplaced: usize,
}

/// A buyer in processing order, with the first-choice fit that put them there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedBuyer<'a> {
    pub buyer: &'a Buyer,
    pub preferred_fit: i128,
}

/// Uniform per-neighborhood capacity: floor of buyers over neighborhoods.
pub fn capacity(buyer_count: usize, neighborhood_count: usize) -> Result<usize, AllocationError> {
    if neighborhood_count == 0 {
        return Err(AllocationError::NoNeighborhoods);
    }
    Ok(buyer_count / neighborhood_count)
}

/// Orders buyers by first-choice fit, highest first. Equal fits keep their
/// input order. Every buyer is scored before any ordering happens.
pub fn rank_buyers<'a>(
    roster: &NeighborhoodRoster,
    buyers: &'a [Buyer],
) -> Result<Vec<RankedBuyer<'a>>, AllocationError> {
    let mut ranked = buyers
        .iter()
        .map(|buyer| {
            preferred_fit(buyer, roster).map(|preferred_fit| RankedBuyer {
                buyer,
                preferred_fit,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // sort_by is stable
    ranked.sort_by(|a, b| b.preferred_fit.cmp(&a.preferred_fit));
    Ok(ranked)
}

/// Places buyers greedily in ranked order into the first preferred
/// neighborhood with room. A buyer whose preferences are all full is skipped.
pub fn allocate(
    roster: &mut NeighborhoodRoster,
    buyers: &[Buyer],
) -> Result<AllocationSummary, AllocationError> {
    let capacity = capacity(buyers.len(), roster.len())?;
    let ranked = rank_buyers(roster, buyers)?;
    info!(
        capacity,
        buyers = buyers.len(),
        neighborhoods = roster.len(),
        "allocating buyers"
    );

    let mut placed = 0;
    for RankedBuyer { buyer, .. } in ranked {
        for preference in &buyer.preferences {
            let neighborhood =
                roster
                    .get_mut(preference)
                    .ok_or_else(|| AllocationError::UnknownNeighborhood {
                        buyer: buyer.name.clone(),
                        neighborhood: preference.clone(),
                    })?;

            if neighborhood.has_room(capacity) {
                let score = fit(buyer, neighborhood)?;
                neighborhood.add_buyer(buyer, score);
                debug!(
                    buyer = %buyer.name,
                    neighborhood = %neighborhood.name,
                    score,
                    "placed buyer"
                );
                placed += 1;
                break;
            }
        }
    }

    let summary = AllocationSummary {
        capacity,
        buyers: buyers.len(),
        placed,
        unplaced: buyers.len() - placed,
    };
    info!(
        placed = summary.placed,
        unplaced = summary.unplaced,
        "allocation complete"
    );
    Ok(summary)
}
