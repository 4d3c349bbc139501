use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "star_system")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Star system ID assigned by UEX
    pub uex_id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub jurisdiction: Option<String>,
    pub faction: Option<String>,
    pub is_available: bool,
    pub is_visible: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::planet::Entity")]
    Planet,
    #[sea_orm(has_many = "super::moon::Entity")]
    Moon,
    #[sea_orm(has_many = "super::space_station::Entity")]
    SpaceStation,
    #[sea_orm(has_many = "super::outpost::Entity")]
    Outpost,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::moon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Moon.def()
    }
}

impl Related<super::space_station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpaceStation.def()
    }
}

impl Related<super::outpost::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Outpost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
