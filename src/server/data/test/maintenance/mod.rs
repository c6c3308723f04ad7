use crate::server::data::maintenance::MaintenanceRepository;
use entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod integrity;
mod slugs;
