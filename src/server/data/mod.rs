//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same code runs against a
//! `DatabaseConnection` or inside a `DatabaseTransaction`. Pass the transaction as the
//! connection when several writes must commit or roll back together.
//!
//! - `catalogue` - reference data synchronised from UEX (commodities, star systems, planets,
//!   moons, space stations)
//! - `outpost` - outposts, their commodity stock rows and the change log of those rows

pub mod catalogue;
pub mod outpost;
