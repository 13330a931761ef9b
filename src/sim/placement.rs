use rand::RngCore;

use super::coordinator::Coordinator;

/// One-time sequential phase before any actor thread exists.
///
/// Each alien, in registry order, lands in a city drawn uniformly from
/// the set still standing — the pool shrinks whenever a collision
/// fights and razes a city. If the pool empties, the remaining aliens
/// stay unplaced and never enter the concurrent phase.
pub fn place_aliens(coordinator: &mut Coordinator, rng: &mut dyn RngCore) {
    let ids: Vec<u64> = coordinator.world.aliens.keys().copied().collect();
    for id in ids {
        let Some(city) = coordinator.world.choose_city(rng) else {
            break;
        };
        coordinator.occupy(id, &city);
    }
    tracing::debug!(
        placed = coordinator.world.aliens.values().filter(|a| a.city.is_some()).count(),
        cities = coordinator.world.cities.len(),
        fights = coordinator.fights,
        "initial placement complete"
    );
}
