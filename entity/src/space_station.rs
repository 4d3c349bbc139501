use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "space_station")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Space station ID assigned by UEX
    pub uex_id: i64,
    pub name: String,
    pub code: String,
    pub star_system_id: i32,
    pub planet_id: Option<i32>,
    pub moon_id: Option<i32>,
    pub pad_types: Option<String>,
    pub jurisdiction: Option<String>,
    pub faction: Option<String>,
    pub has_trade_terminal: bool,
    pub has_refinery: bool,
    pub orbit: Option<String>,
    pub is_lagrange: bool,
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
        on_delete = "Cascade"
    )]
    StarSystem,
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::moon::Entity",
        from = "Column::MoonId",
        to = "super::moon::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Moon,
}

impl Related<super::star_system::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StarSystem.def()
    }
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

impl ActiveModelBehavior for ActiveModel {}
