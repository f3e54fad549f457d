pub mod command;
pub mod dependency_injection;
