use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "campground_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub campground_id: i32,
    pub url: String,
    /// Media host public id, used to destroy the remote asset.
    pub filename: String,
    pub alt: Option<String>,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campground::Entity",
        from = "Column::CampgroundId",
        to = "super::campground::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Campground,
}

impl Related<super::campground::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campground.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
