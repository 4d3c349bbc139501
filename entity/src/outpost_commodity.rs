use sea_orm::entity::prelude::*;

/// Stock level of one commodity at one outpost.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "outpost_commodity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub outpost_id: i32,
    pub commodity_id: i32,
    pub amount: f64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::outpost::Entity",
        from = "Column::OutpostId",
        to = "super::outpost::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Outpost,
    #[sea_orm(
        belongs_to = "super::commodity::Entity",
        from = "Column::CommodityId",
        to = "super::commodity::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Commodity,
    #[sea_orm(has_many = "super::commodity_change::Entity")]
    CommodityChange,
}

impl Related<super::outpost::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Outpost.def()
    }
}

impl Related<super::commodity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commodity.def()
    }
}

impl Related<super::commodity_change::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CommodityChange.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
