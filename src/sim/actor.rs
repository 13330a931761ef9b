use crossbeam_channel::Sender;
use rand::Rng;

use crate::model::{Direction, KillSwitch};

/// One movement intent: `alien_id` wants to leave its current city in
/// `direction`. Direction choice happens on the actor's thread; the
/// coordinator resolves what the move means against the live graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flight {
    pub alien_id: u64,
    pub direction: Direction,
}

/// The per-alien actor loop.
///
/// Runs up to `budget` steps. Each step first observes the kill switch
/// (fired → stop), then sends a random movement intent over the
/// rendezvous `movements` channel, blocking until the coordinator
/// drains it — so an actor can never run ahead of the coordinator, and
/// its own steps are strictly ordered. A forfeited or trapped move
/// still costs a step; the coordinator decides that, not the actor.
///
/// Exactly one completion signal is sent on `done`, whether the loop
/// exhausted its budget, was cancelled, or lost the coordinator.
pub fn invade(
    alien_id: u64,
    switch: KillSwitch,
    budget: u32,
    mut rng: impl Rng,
    movements: Sender<Flight>,
    done: Sender<()>,
) {
    for _ in 0..budget {
        if switch.is_fired() {
            break;
        }
        let flight = Flight {
            alien_id,
            direction: Direction::random(&mut rng),
        };
        if movements.send(flight).is_err() {
            break; // coordinator hung up
        }
    }
    let _ = done.send(());
}
