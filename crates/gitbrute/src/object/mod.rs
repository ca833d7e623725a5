mod commit;
mod decimal;
mod wrap;

pub use commit::*;
pub(crate) use decimal::*;
pub use wrap::*;
