pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_user_table;
mod m20250101_000002_create_campground_table;
mod m20250101_000003_create_campground_image_table;
mod m20250101_000004_create_review_table;
mod m20250102_000005_create_user_favorite_table;
mod m20250103_000006_add_compound_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_user_table::Migration),
            Box::new(m20250101_000002_create_campground_table::Migration),
            Box::new(m20250101_000003_create_campground_image_table::Migration),
            Box::new(m20250101_000004_create_review_table::Migration),
            Box::new(m20250102_000005_create_user_favorite_table::Migration),
            Box::new(m20250103_000006_add_compound_indexes::Migration),
        ]
    }
}
