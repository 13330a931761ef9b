use crate::model::World;

use super::actor::Flight;

/// The single authority over graph and registry mutation.
///
/// Every transition runs to completion on the coordinator's thread
/// before the next message is taken, so the shared world needs no
/// locks. Stale messages — a movement intent from an alien destroyed
/// mid-flight, a fight signal for an already-razed city — are silently
/// dropped rather than treated as errors: concurrent producers are
/// allowed to race with destructive events.
#[derive(Debug)]
pub struct Coordinator {
    pub world: World,
    /// Number of fights so far. Each fight destroys exactly two aliens
    /// and one city.
    pub fights: u64,
}

impl Coordinator {
    pub fn new(world: World) -> Self {
        Self { world, fights: 0 }
    }

    /// Land an alien in a city during initial placement. An empty city
    /// gains an occupant; an occupied one hosts a fight instead.
    ///
    /// # Panics
    /// Panics if the city or alien is missing — placement only hands
    /// out live names and ids.
    pub fn occupy(&mut self, alien_id: u64, city_name: &str) {
        let city = self
            .world
            .city(city_name)
            .unwrap_or_else(|| panic!("occupy: city {city_name} not found"));
        if city.occupant.is_some() {
            self.fight(city_name, alien_id);
            return;
        }
        self.world
            .city_mut(city_name)
            .unwrap_or_else(|| panic!("occupy: city {city_name} not found"))
            .occupant = Some(alien_id);
        self.world
            .aliens
            .get_mut(&alien_id)
            .unwrap_or_else(|| panic!("occupy: alien {alien_id} not found"))
            .city = Some(city_name.to_string());
    }

    /// Mutual destruction of the challenger and the city's occupant,
    /// taking the city and every road referencing it along.
    ///
    /// No-op unless the city currently has an occupant, which guards
    /// against stale or duplicate signals and makes the transition
    /// idempotent on an already-destroyed city.
    pub fn fight(&mut self, city_name: &str, challenger_id: u64) {
        let Some(defender_id) = self.world.city(city_name).and_then(|c| c.occupant) else {
            return;
        };
        for id in [challenger_id, defender_id] {
            if let Some(alien) = self.world.aliens.get(&id) {
                alien.cancel();
            }
        }
        self.world.aliens.remove(&challenger_id);
        self.world.aliens.remove(&defender_id);
        self.world.remove_city(city_name);
        self.fights += 1;
        tracing::info!(
            city = city_name,
            challenger = challenger_id,
            defender = defender_id,
            "aliens fought and destroyed the city"
        );
    }

    /// Apply one movement intent.
    ///
    /// Ignored if the alien was destroyed before the intent arrived. A
    /// trapped alien (zero outgoing roads) is cancelled on the spot, in
    /// whatever direction it tried to leave. A missing road in the
    /// chosen direction forfeits the move silently. Otherwise the alien
    /// leaves its city and either fights at the destination or occupies
    /// it.
    pub fn move_alien(&mut self, flight: Flight) {
        let Some(alien) = self.world.aliens.get(&flight.alien_id) else {
            return; // destroyed mid-flight; intent is stale
        };
        let Some(from_name) = alien.city.clone() else {
            return;
        };
        let from = self.world.city(&from_name).unwrap_or_else(|| {
            panic!(
                "move_alien: alien {} occupies missing city {from_name}",
                flight.alien_id
            )
        });

        if from.is_dead_end() {
            alien.cancel();
            tracing::debug!(
                alien = flight.alien_id,
                city = %from_name,
                "trapped alien cancelled"
            );
            return;
        }

        let Some(destination) = from.road(flight.direction).map(str::to_string) else {
            return; // no road that way; move forfeited
        };

        // Vacate before inspecting the destination: on a self-loop road
        // the alien would otherwise read itself as the occupant and
        // trigger a fight against nobody.
        self.world
            .city_mut(&from_name)
            .unwrap_or_else(|| panic!("move_alien: city {from_name} not found"))
            .occupant = None;
        let destination_occupied = self
            .world
            .city(&destination)
            .unwrap_or_else(|| {
                panic!("move_alien: road from {from_name} ends at missing city {destination}")
            })
            .occupant
            .is_some();

        if destination_occupied {
            self.fight(&destination, flight.alien_id);
        } else {
            self.world
                .city_mut(&destination)
                .unwrap_or_else(|| panic!("move_alien: city {destination} not found"))
                .occupant = Some(flight.alien_id);
            self.world
                .aliens
                .get_mut(&flight.alien_id)
                .unwrap_or_else(|| panic!("move_alien: alien {} not found", flight.alien_id))
                .city = Some(destination);
        }
    }
}
