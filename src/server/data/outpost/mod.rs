//! Repositories for outposts and the records derived from them.

pub mod commodity_change;
pub mod outpost;
pub mod outpost_commodity;

#[cfg(test)]
mod tests;
