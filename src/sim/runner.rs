use std::thread;

use crossbeam_channel::{bounded, select};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::model::{KillSwitch, World};

use super::actor::{Flight, invade};
use super::coordinator::Coordinator;
use super::placement::place_aliens;

/// Steps each alien may take before its actor loop gives up.
pub const DEFAULT_MOVE_BUDGET: u32 = 10_000;

/// Configuration for one war.
#[derive(Debug, Clone)]
pub struct WarConfig {
    pub num_aliens: u64,
    pub move_budget: u32,
    pub seed: u64,
}

impl WarConfig {
    pub fn new(num_aliens: u64, seed: u64) -> Self {
        Self {
            num_aliens,
            move_budget: DEFAULT_MOVE_BUDGET,
            seed,
        }
    }
}

/// Final state of a finished war.
#[derive(Debug)]
pub struct WarOutcome {
    /// The surviving graph and alien registry.
    pub world: World,
    /// Total fights across placement and the concurrent phase. Each
    /// one consumed two aliens and one city.
    pub fights: u64,
    /// Aliens that survived initial placement and entered the
    /// concurrent phase.
    pub placed: usize,
}

/// Run a full war on the given graph.
///
/// Spawns `config.num_aliens` aliens, places them sequentially, then
/// launches one actor thread per placed alien and drives the
/// coordinator loop until every actor has reported completion. The
/// placement RNG is seeded from `config.seed` and each actor derives
/// its own stream from the seed and its id, but the interleaving of
/// actor intents is scheduler-dependent, so runs are not reproducible
/// end to end.
pub fn start_war(mut world: World, config: &WarConfig) -> WarOutcome {
    world.spawn_aliens(config.num_aliens);

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut coordinator = Coordinator::new(world);
    place_aliens(&mut coordinator, &mut rng);

    let actors: Vec<(u64, KillSwitch)> = coordinator
        .world
        .aliens
        .values()
        .filter(|alien| alien.city.is_some())
        .map(|alien| (alien.id, alien.switch()))
        .collect();
    let placed = actors.len();

    // Nothing left to contest, or nobody to contest it.
    if coordinator.world.cities.is_empty() || actors.is_empty() {
        return WarOutcome {
            fights: coordinator.fights,
            placed,
            world: coordinator.world,
        };
    }

    tracing::info!(
        aliens = placed,
        cities = coordinator.world.cities.len(),
        budget = config.move_budget,
        "invasion begins"
    );

    // Rendezvous channels: an actor cannot take step k+1 until the
    // coordinator has drained step k.
    let (movement_tx, movement_rx) = bounded::<Flight>(0);
    let (done_tx, done_rx) = bounded::<()>(0);
    let budget = config.move_budget;

    thread::scope(|scope| {
        for (id, switch) in actors {
            let movements = movement_tx.clone();
            let done = done_tx.clone();
            // Per-actor RNG stream; id offsets keep streams distinct.
            let rng = SmallRng::seed_from_u64(config.seed.wrapping_add(id).wrapping_add(1));
            scope.spawn(move || invade(id, switch, budget, rng, movements, done));
        }

        let mut live = placed;
        while live > 0 {
            select! {
                recv(movement_rx) -> flight => {
                    if let Ok(flight) = flight {
                        coordinator.move_alien(flight);
                    }
                }
                recv(done_rx) -> signal => {
                    if signal.is_ok() {
                        live -= 1;
                    }
                }
            }
        }
    });

    tracing::info!(
        fights = coordinator.fights,
        survivors = coordinator.world.aliens.len(),
        cities = coordinator.world.cities.len(),
        "invasion over"
    );
    WarOutcome {
        fights: coordinator.fights,
        placed,
        world: coordinator.world,
    }
}
