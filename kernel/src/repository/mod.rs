pub mod catalog;
pub mod forms;
pub mod schedule;
