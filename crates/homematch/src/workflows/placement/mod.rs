//! Capacity-constrained, preference-driven placement of buyers into
//! neighborhoods, plus rendering of the finished assignment.

pub mod allocator;
pub mod domain;
pub mod fit;
pub mod report;

#[cfg(test)]
mod tests;

pub use allocator::{
    allocate, capacity, rank_buyers, AllocationError, AllocationSummary, RankedBuyer,
};
pub use domain::{AttributeWeights, Buyer, Neighborhood, NeighborhoodRoster, Placement};
pub use fit::{fit, preferred_fit};
pub use report::{render_line, render_text, write_csv, AllocationReport};
