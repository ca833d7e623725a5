mod config;
mod coordinator;
mod solution;

pub use config::*;
pub use coordinator::*;
pub use solution::*;
