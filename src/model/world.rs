use std::collections::BTreeMap;
use std::fmt;

use rand::{Rng, RngCore};

use super::alien::Alien;
use super::city::City;
use super::direction::Direction;

/// The full city and alien registries — the single source of truth.
///
/// Invariants: every city occupant exists in the alien registry with a
/// matching back-reference, and vice versa; no road points at a city
/// absent from the registry. All mutation during a war goes through the
/// coordinator; `World` itself only offers structural operations.
#[derive(Debug, Default)]
pub struct World {
    pub cities: BTreeMap<String, City>,
    pub aliens: BTreeMap<u64, Alien>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a city by name.
    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    pub fn city_mut(&mut self, name: &str) -> Option<&mut City> {
        self.cities.get_mut(name)
    }

    /// Remove the road leaving `from` in `direction`. No-op if either
    /// the city or the road is absent.
    pub fn remove_road(&mut self, from: &str, direction: Direction) {
        if let Some(city) = self.cities.get_mut(from) {
            city.roads.remove(&direction);
        }
    }

    /// Remove a city and every road referencing it.
    ///
    /// Inbound roads are purged from all remaining cities, not just the
    /// reverses of the doomed city's own roads, so the graph never
    /// retains a road to a city that no longer exists. The city's
    /// outgoing roads go with it. No-op if the city is already gone.
    pub fn remove_city(&mut self, name: &str) {
        if !self.cities.contains_key(name) {
            return;
        }
        for city in self.cities.values_mut() {
            city.roads.retain(|_, destination| destination != name);
        }
        self.cities.remove(name);
    }

    /// Sample a city name uniformly from the live city set, or `None`
    /// if no cities remain. Indexes the sorted key set explicitly so
    /// the draw never depends on incidental iteration order.
    pub fn choose_city(&self, rng: &mut dyn RngCore) -> Option<String> {
        if self.cities.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.cities.len());
        self.cities.keys().nth(index).cloned()
    }

    /// Create aliens with ids `0..count` in the registry.
    ///
    /// # Panics
    /// Panics if aliens already exist — the registry is populated once,
    /// before the war starts.
    pub fn spawn_aliens(&mut self, count: u64) {
        assert!(
            self.aliens.is_empty(),
            "spawn_aliens: alien registry already populated"
        );
        for id in 0..count {
            self.aliens.insert(id, Alien::new(id));
        }
    }
}

/// Renders the surviving graph in the map format it was parsed from:
/// one line per city, `Name dir=Dest ...`, cities in sorted order.
impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for city in self.cities.values() {
            write!(f, "{}", city.name)?;
            for (direction, destination) in &city.roads {
                write!(f, " {direction}={destination}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
