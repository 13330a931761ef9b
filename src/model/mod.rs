pub mod alien;
pub mod city;
pub mod direction;
pub mod world;

pub use alien::{Alien, KillSwitch};
pub use city::City;
pub use direction::Direction;
pub use world::World;
