mod actor;
mod coordinator;
mod placement;
mod runner;

pub use actor::{Flight, invade};
pub use coordinator::Coordinator;
pub use placement::place_aliens;
pub use runner::{DEFAULT_MOVE_BUDGET, WarConfig, WarOutcome, start_war};
