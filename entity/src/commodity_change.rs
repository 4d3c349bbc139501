use sea_orm::entity::prelude::*;

/// Signed change of an outpost commodity stock level.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "commodity_change")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub outpost_commodity_id: i32,
    pub commodity_id: i32,
    pub change_amount: f64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::outpost_commodity::Entity",
        from = "Column::OutpostCommodityId",
        to = "super::outpost_commodity::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    OutpostCommodity,
    #[sea_orm(
        belongs_to = "super::commodity::Entity",
        from = "Column::CommodityId",
        to = "super::commodity::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Commodity,
}

impl Related<super::outpost_commodity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutpostCommodity.def()
    }
}

impl Related<super::commodity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commodity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
