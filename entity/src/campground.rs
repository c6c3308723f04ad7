use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "campground")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Unset on rows created before slugs existed; assigned by the startup backfill.
    #[sea_orm(unique)]
    pub slug: Option<String>,
    pub title: String,
    pub price: f64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub location: String,
    /// GeoJSON Point longitude in degrees.
    pub longitude: f64,
    /// GeoJSON Point latitude in degrees.
    pub latitude: f64,
    pub author_id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::campground_image::Entity")]
    CampgroundImage,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
    #[sea_orm(has_many = "super::user_favorite::Entity")]
    UserFavorite,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::campground_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampgroundImage.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::user_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
