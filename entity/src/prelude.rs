pub use super::commodity::Entity as Commodity;
pub use super::commodity_change::Entity as CommodityChange;
pub use super::moon::Entity as Moon;
pub use super::outpost::Entity as Outpost;
pub use super::outpost_commodity::Entity as OutpostCommodity;
pub use super::planet::Entity as Planet;
pub use super::space_station::Entity as SpaceStation;
pub use super::star_system::Entity as StarSystem;
