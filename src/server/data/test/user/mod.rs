use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_email;
