pub mod flush;
pub mod model;
pub mod parse;
pub mod sim;

pub use model::{Alien, City, Direction, KillSwitch, World};
pub use sim::{Coordinator, Flight, WarConfig, WarOutcome, start_war};
