use crate::server::{data::review::ReviewRepository, model::review::CreateReviewParams};
use chrono::{Duration, Utc};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_page_for_campground;
