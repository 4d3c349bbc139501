use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "commodity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub kind: String,
    pub price_buy: f64,
    pub price_sell: f64,
    pub is_illegal: bool,
    pub is_sellable: bool,
    pub is_available_live: bool,
    pub is_temporary: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::outpost_commodity::Entity")]
    OutpostCommodity,
    #[sea_orm(has_many = "super::commodity_change::Entity")]
    CommodityChange,
}

impl Related<super::outpost_commodity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutpostCommodity.def()
    }
}

impl Related<super::commodity_change::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CommodityChange.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
