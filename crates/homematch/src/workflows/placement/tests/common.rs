use crate::workflows::placement::domain::{
    AttributeWeights, Buyer, Neighborhood, NeighborhoodRoster,
};

pub(super) fn weights(pairs: &[(&str, i64)]) -> AttributeWeights {
    pairs.iter().map(|(key, value)| (*key, *value)).collect()
}

pub(super) fn buyer(name: &str, goals: &[(&str, i64)], preferences: &[&str]) -> Buyer {
    Buyer::new(
        name,
        weights(goals),
        preferences.iter().map(|name| name.to_string()).collect(),
    )
}

pub(super) fn roster(entries: &[(&str, &[(&str, i64)])]) -> NeighborhoodRoster {
    entries
        .iter()
        .map(|(name, scores)| Neighborhood::new(*name, weights(scores)))
        .collect()
}

/// Two neighborhoods and two buyers who each get their first choice.
pub(super) fn two_by_two() -> (NeighborhoodRoster, Vec<Buyer>) {
    let roster = roster(&[
        ("N1", &[("E", 7), ("W", 5), ("R", 8)]),
        ("N2", &[("E", 8), ("W", 6), ("R", 9)]),
    ]);
    let buyers = vec![
        buyer("H1", &[("E", 8), ("W", 6), ("R", 9)], &["N1", "N2"]),
        buyer("H2", &[("E", 9), ("W", 5), ("R", 7)], &["N2", "N1"]),
    ];
    (roster, buyers)
}

/// Buyers with identical profiles, so every first-choice fit ties.
pub(super) fn identical_buyers(count: usize, preferences: &[&str]) -> Vec<Buyer> {
    (0..count)
        .map(|index| buyer(&format!("H{index}"), &[("E", 1), ("W", 1), ("R", 1)], preferences))
        .collect()
}

pub(super) fn placed_names(roster: &NeighborhoodRoster, neighborhood: &str) -> Vec<String> {
    roster
        .get(neighborhood)
        .expect("neighborhood present")
        .assigned()
        .iter()
        .map(|placement| placement.buyer.clone())
        .collect()
}
