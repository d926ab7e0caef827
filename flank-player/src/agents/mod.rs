//! Agents decide moves for one side of a game.

mod agent;
mod human;
mod random;

pub use agent::Agent;
pub use human::HumanAgent;
pub use random::RandomAgent;
