pub mod clubs;
pub mod games;
pub mod players;
