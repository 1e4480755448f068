use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Integer weights keyed by attribute name. Attribute sets are data-driven,
/// so there is no fixed schema; missing attributes read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeWeights(BTreeMap<String, i64>);

impl AttributeWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `attribute`, replacing any earlier weight for the same key.
    pub fn insert(&mut self, attribute: impl Into<String>, weight: i64) {
        self.0.insert(attribute.into(), weight);
    }

    pub fn get(&self, attribute: &str) -> i64 {
        self.0.get(attribute).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(key, weight)| (key.as_str(), *weight))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for AttributeWeights {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut weights = Self::new();
        for (attribute, weight) in iter {
            weights.insert(attribute, weight);
        }
        weights
    }
}

/// A buyer's desired profile and ranked neighborhood choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    pub name: String,
    pub goals: AttributeWeights,
    /// Most-preferred first. Names are not validated until lookup.
    pub preferences: Vec<String>,
}

impl Buyer {
    pub fn new(name: impl Into<String>, goals: AttributeWeights, preferences: Vec<String>) -> Self {
        Self {
            name: name.into(),
            goals,
            preferences,
        }
    }

    pub fn first_choice(&self) -> Option<&str> {
        self.preferences.first().map(String::as_str)
    }
}

/// A buyer recorded against a neighborhood together with their fit there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub buyer: String,
    pub score: i128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighborhood {
    pub name: String,
    pub scores: AttributeWeights,
    assigned: Vec<Placement>,
}

impl Neighborhood {
    pub fn new(name: impl Into<String>, scores: AttributeWeights) -> Self {
        Self {
            name: name.into(),
            scores,
            assigned: Vec::new(),
        }
    }

    /// Placements in the order they were made.
    pub fn assigned(&self) -> &[Placement] {
        &self.assigned
    }

    pub fn occupancy(&self) -> usize {
        self.assigned.len()
    }

    pub fn has_room(&self, capacity: usize) -> bool {
        self.assigned.len() < capacity
    }

    pub fn add_buyer(&mut self, buyer: &Buyer, score: i128) {
        self.assigned.push(Placement {
            buyer: buyer.name.clone(),
            score,
        });
    }
}

/// Insertion-ordered neighborhood set with lookup by name.
#[derive(Debug, Clone, Default)]
pub struct NeighborhoodRoster {
    entries: Vec<Neighborhood>,
    index: HashMap<String, usize>,
}

impl NeighborhoodRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `neighborhood`. A repeated name replaces the earlier entry but
    /// keeps its original position.
    pub fn insert(&mut self, neighborhood: Neighborhood) {
        match self.index.get(&neighborhood.name) {
            Some(&position) => {
                warn!(
                    neighborhood = %neighborhood.name,
                    "duplicate neighborhood record replaces earlier definition"
                );
                self.entries[position] = neighborhood;
            }
            None => {
                self.index
                    .insert(neighborhood.name.clone(), self.entries.len());
                self.entries.push(neighborhood);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Neighborhood> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Neighborhood> {
        match self.index.get(name) {
            Some(&position) => self.entries.get_mut(position),
            None => None,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Neighborhood> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_placed(&self) -> usize {
        self.entries.iter().map(Neighborhood::occupancy).sum()
    }
}

impl FromIterator<Neighborhood> for NeighborhoodRoster {
    fn from_iter<I: IntoIterator<Item = Neighborhood>>(iter: I) -> Self {
        let mut roster = Self::new();
        for neighborhood in iter {
            roster.insert(neighborhood);
        }
        roster
    }
}

impl<'a> IntoIterator for &'a NeighborhoodRoster {
    type Item = &'a Neighborhood;
    type IntoIter = std::slice::Iter<'a, Neighborhood>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
