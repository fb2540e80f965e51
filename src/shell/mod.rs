//! Shell execution of generated commands.

pub mod runner;

pub use runner::run;
