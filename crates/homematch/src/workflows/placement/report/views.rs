use super::super::domain::{Neighborhood, Placement};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementView {
    pub rank: usize,
    pub buyer: String,
    pub score: i128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborhoodView {
    pub name: String,
    pub occupancy: usize,
    pub placements: Vec<PlacementView>,
}

impl NeighborhoodView {
    pub fn from_neighborhood(neighborhood: &Neighborhood) -> Self {
        let placements = ranked_placements(neighborhood)
            .into_iter()
            .enumerate()
            .map(|(position, placement)| PlacementView {
                rank: position + 1,
                buyer: placement.buyer.clone(),
                score: placement.score,
            })
            .collect();

        Self {
            name: neighborhood.name.clone(),
            occupancy: neighborhood.occupancy(),
            placements,
        }
    }
}

/// Placements by score, highest first; equal scores stay in assignment order.
/// The neighborhood itself is left untouched.
pub(crate) fn ranked_placements(neighborhood: &Neighborhood) -> Vec<&Placement> {
    let mut placements: Vec<&Placement> = neighborhood.assigned().iter().collect();
    placements.sort_by(|a, b| b.score.cmp(&a.score));
    placements
}
