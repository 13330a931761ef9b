use std::collections::BTreeMap;

use serde::Serialize;

use super::direction::Direction;

/// A node in the road graph. At most one road per direction, at most
/// one occupying alien. Destroyed wholesale when a fight happens here.
#[derive(Debug, Clone, Serialize)]
pub struct City {
    pub name: String,
    /// Outgoing roads only. A→B does not imply B→A.
    pub roads: BTreeMap<Direction, String>,
    /// Id of the alien currently here, if any. The alien's own
    /// `city` field must point back at this city.
    pub occupant: Option<u64>,
}

impl City {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            roads: BTreeMap::new(),
            occupant: None,
        }
    }

    /// Destination of the road in `direction`, if one exists.
    pub fn road(&self, direction: Direction) -> Option<&str> {
        self.roads.get(&direction).map(String::as_str)
    }

    /// A city with no outgoing roads traps its occupant.
    pub fn is_dead_end(&self) -> bool {
        self.roads.is_empty()
    }
}
