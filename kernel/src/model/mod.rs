pub mod booking;
pub mod game;
pub mod id;
pub mod slot;
pub mod snack;
