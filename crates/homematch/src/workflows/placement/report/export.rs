use super::super::domain::NeighborhoodRoster;
use super::views::ranked_placements;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct PlacementRow<'a> {
    neighborhood: &'a str,
    buyer: &'a str,
    score: i128,
    rank: usize,
}

/// Writes one row per placement, neighborhoods in roster order. The header is
/// emitted with the first row, so an empty roster writes nothing.
pub fn write_csv<W: Write>(roster: &NeighborhoodRoster, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for neighborhood in roster {
        for (position, placement) in ranked_placements(neighborhood).into_iter().enumerate() {
            csv_writer.serialize(PlacementRow {
                neighborhood: &neighborhood.name,
                buyer: &placement.buyer,
                score: placement.score,
                rank: position + 1,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}
