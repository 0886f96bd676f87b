pub mod booking;
pub mod catalog;
pub mod echo;
pub mod health;
