pub mod config;
pub mod forms;
pub mod modal;
