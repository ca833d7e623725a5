mod explorer;
mod interface;
mod split;
#[cfg(test)]
mod tests;

pub use explorer::*;
pub use interface::*;
pub use split::*;
