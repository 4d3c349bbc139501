use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "outpost")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub star_system_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::star_system::Entity",
        from = "Column::StarSystemId",
        to = "super::star_system::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    StarSystem,
    #[sea_orm(has_many = "super::outpost_commodity::Entity")]
    OutpostCommodity,
}

impl Related<super::star_system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StarSystem.def()
    }
}

impl Related<super::outpost_commodity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutpostCommodity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
