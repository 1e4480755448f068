use super::super::allocator::AllocationSummary;
use super::super::domain::{Neighborhood, NeighborhoodRoster};
use super::views::{ranked_placements, NeighborhoodView};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// `"<name>: <buyer>(<score>) ..."` with placements ordered by score.
pub fn render_line(neighborhood: &Neighborhood) -> String {
    let buyers = ranked_placements(neighborhood)
        .iter()
        .map(|placement| format!("{}({})", placement.buyer, placement.score))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{}: {}", neighborhood.name, buyers)
}

/// One newline-terminated line per neighborhood, in roster order.
pub fn render_text(roster: &NeighborhoodRoster) -> String {
    roster
        .iter()
        .map(|neighborhood| format!("{}\n", render_line(neighborhood)))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct AllocationReport {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub summary: AllocationSummary,
    pub neighborhoods: Vec<NeighborhoodView>,
}

impl AllocationReport {
    pub fn new(roster: &NeighborhoodRoster, summary: AllocationSummary) -> Self {
        Self::at(roster, summary, Utc::now())
    }

    pub fn at(
        roster: &NeighborhoodRoster,
        summary: AllocationSummary,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            generated_at,
            summary,
            neighborhoods: roster
                .iter()
                .map(NeighborhoodView::from_neighborhood)
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
