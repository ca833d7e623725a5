#![doc = include_str!("../README.md")]

mod checker;
mod error;
mod explore;
#[cfg(test)]
mod fixtures;
mod object;
mod prefix;
mod solver;
mod time;

pub use crate::checker::*;
pub use crate::error::*;
pub use crate::explore::*;
pub use crate::object::*;
pub use crate::prefix::*;
pub use crate::solver::*;
pub use crate::time::*;
