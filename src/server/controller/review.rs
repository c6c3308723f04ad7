use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, ReviewDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ApiJson,
            session::FlashSession,
            validation::validate_review,
        },
        model::review::{CreateReviewParams, ReviewWithAuthor},
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Review a campground.
///
/// # Access Control
/// - Signed in user; becomes the review's author
///
/// # Returns
/// - `201 Created` - Created review
/// - `400 Bad Request` - Rating or body invalid
/// - `401 Unauthorized` - Not signed in
/// - `404 Not Found` - Campground not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/campgrounds/{id}/reviews",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Campground id")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Created review", body = ReviewDto),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 404, description = "Campground not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(campground_id): Path<i32>,
    ApiJson(payload): ApiJson<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .with_return_to(uri.to_string())
        .require(&[])
        .await?;

    let (rating, body) = validate_review(&payload)?;

    let review = ReviewService::new(&state.db)
        .create(CreateReviewParams {
            campground_id,
            author_id: user.id,
            rating,
            body,
        })
        .await?;

    FlashSession::new(&session).success("Created new review!").await?;

    let dto = ReviewWithAuthor {
        review,
        author: Some(user),
    }
    .into_dto();

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Delete a review.
///
/// # Access Control
/// - Review author
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Not the review's author
/// - `404 Not Found` - Review missing or belongs to another campground
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/campgrounds/{id}/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Campground id"),
        ("review_id" = i32, Path, description = "Review id")
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path((campground_id, review_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .with_return_to(uri.to_string())
        .require(&[Permission::ReviewAuthor {
            campground_id,
            review_id,
        }])
        .await?;

    if !ReviewService::new(&state.db).delete(review_id).await? {
        return Err(AppError::NotFound("Review not found".to_string()));
    }

    FlashSession::new(&session)
        .success("Successfully deleted review")
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
