use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "moon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Moon ID assigned by UEX
    pub uex_id: i64,
    pub code: String,
    pub name: String,
    pub planet_id: i32,
    pub star_system_id: Option<i32>,
    pub jurisdiction: Option<String>,
    pub faction: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::star_system::Entity",
        from = "Column::StarSystemId",
        to = "super::star_system::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    StarSystem,
    #[sea_orm(has_many = "super::space_station::Entity")]
    SpaceStation,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::star_system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StarSystem.def()
    }
}

impl Related<super::space_station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpaceStation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
