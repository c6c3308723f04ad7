use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::{AuthSession, ReturnToSession},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod current_user;
mod require;
mod require_campground_author;
mod require_review_author;
