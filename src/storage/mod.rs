pub mod interface;
pub mod players;
