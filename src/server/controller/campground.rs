use axum::{
    extract::{Multipart, OriginalUri, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        campground::{
            CampgroundDetailDto, CampgroundDto, CampgroundFormDto, CampgroundIndexDto,
            FavoriteStatusDto, FavoritesDto, IndexFiltersDto, NearbyDto, NearbyFiltersDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::FlashSession,
            validation::{validate_campground, CampgroundForm},
        },
        model::{
            campground::{
                CampgroundFilter, CampgroundLookup, CreateCampgroundParams, IndexQuery,
                NearbyQuery, NearbySort, UpdateCampgroundParams,
            },
            geo::{GeoFilter, GeoPoint},
        },
        service::{
            campground::{CampgroundService, REVIEWS_PER_PAGE},
            favorite::FavoriteService,
            geocoding::GeocodingService,
            media::{MediaService, UploadedFile},
        },
        state::AppState,
        util::{geo::MAX_RADIUS_KM, url::with_page},
    },
};

/// Tag for grouping campground endpoints in OpenAPI documentation
pub static CAMPGROUND_TAG: &str = "campground";

const DEFAULT_INDEX_LIMIT: u64 = 20;
const MAX_INDEX_LIMIT: u64 = 100;
const MIN_NEARBY_RADIUS_KM: f64 = 1.0;

const NEARBY_NOTICE: &str = "Enter a location and radius, or use your current location.";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct IndexParams {
    /// One-indexed page, default 1
    pub page: Option<String>,
    /// Page size, default 20, at most 100
    pub limit: Option<String>,
    /// Case-insensitive text matched against title, description and location
    pub q: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    /// Search radius in kilometers, capped at 500
    pub radius_km: Option<String>,
}

impl IndexParams {
    /// Parses raw query values into a listing query and the filters to echo back.
    ///
    /// Unparseable numbers are ignored. The geo filter applies only when latitude,
    /// longitude and a positive radius are all present.
    fn to_query(&self) -> (IndexQuery, IndexFiltersDto) {
        let q = self.q.as_deref().unwrap_or_default().trim().to_string();
        let min_price = parse_finite(self.min_price.as_deref());
        let max_price = parse_finite(self.max_price.as_deref());
        let lat = parse_finite(self.lat.as_deref());
        let lng = parse_finite(self.lng.as_deref());
        let radius_km = parse_finite(self.radius_km.as_deref());

        let geo = match (lat, lng, radius_km) {
            (Some(lat), Some(lng), Some(radius)) if radius > 0.0 => Some(GeoFilter {
                center: GeoPoint::new(lng, lat),
                radius_km: radius.min(MAX_RADIUS_KM),
            }),
            _ => None,
        };

        let limit = parse_positive(self.limit.as_deref())
            .unwrap_or(DEFAULT_INDEX_LIMIT)
            .min(MAX_INDEX_LIMIT);

        let query = IndexQuery {
            page: parse_positive(self.page.as_deref()).unwrap_or(1),
            limit,
            filter: CampgroundFilter {
                terms: if q.is_empty() { vec![] } else { vec![q.clone()] },
                min_price,
                max_price,
            },
            geo,
        };

        let filters = IndexFiltersDto {
            q,
            min_price,
            max_price,
            lat,
            lng,
            radius_km,
        };

        (query, filters)
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct NearbyParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    /// Search radius in kilometers, clamped to 1..=500
    pub radius_km: Option<String>,
    /// Whitespace separated terms; a campground matches when any term matches
    pub q: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    /// `distance` (default), `priceAsc` or `priceDesc`
    pub sort: Option<String>,
    pub page: Option<String>,
}

impl NearbyParams {
    fn filters(&self) -> NearbyFiltersDto {
        NearbyFiltersDto {
            q: self.q.as_deref().unwrap_or_default().trim().to_string(),
            min_price: parse_finite(self.min_price.as_deref()),
            max_price: parse_finite(self.max_price.as_deref()),
            lat: parse_finite(self.lat.as_deref()),
            lng: parse_finite(self.lng.as_deref()),
            radius_km: parse_finite(self.radius_km.as_deref()),
            sort: self.sort().as_str().to_string(),
        }
    }

    fn sort(&self) -> NearbySort {
        NearbySort::parse(self.sort.as_deref().unwrap_or_default())
    }

    fn page(&self) -> u64 {
        parse_positive(self.page.as_deref()).unwrap_or(1)
    }

    /// Builds the search, or `None` when a coordinate or the radius is missing.
    fn to_query(&self) -> Option<NearbyQuery> {
        let lat = parse_finite(self.lat.as_deref())?;
        let lng = parse_finite(self.lng.as_deref())?;
        let radius_km = parse_finite(self.radius_km.as_deref())?;

        let filters = self.filters();

        Some(NearbyQuery {
            geo: GeoFilter {
                center: GeoPoint::new(lng, lat),
                radius_km: radius_km.clamp(MIN_NEARBY_RADIUS_KM, MAX_RADIUS_KM),
            },
            filter: CampgroundFilter {
                terms: filters.q.split_whitespace().map(str::to_string).collect(),
                min_price: filters.min_price,
                max_price: filters.max_price,
            },
            sort: self.sort(),
            page: self.page(),
        })
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShowParams {
    /// One-indexed page of reviews
    pub page: Option<String>,
}

/// Campground multipart submission after reading every field.
#[derive(Debug, Default)]
struct CampgroundSubmission {
    form: CampgroundForm,
    files: Vec<UploadedFile>,
    delete_images: Vec<String>,
}

/// List campgrounds.
///
/// Newest first, with optional text, price and radius filters. Includes absolute
/// links to the neighbouring pages and the signed in user's favorite ids.
///
/// # Returns
/// - `200 OK` - Page of campgrounds
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campgrounds",
    tag = CAMPGROUND_TAG,
    params(IndexParams),
    responses(
        (status = 200, description = "Page of campgrounds", body = CampgroundIndexDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campgrounds(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, AppError> {
    let (query, filters) = params.to_query();
    let (page, limit) = (query.page, query.limit);

    let result = CampgroundService::new(&state.db, &state.cache)
        .get_index(query)
        .await?;
    let favorites = current_favorites(&state, &session).await?;

    let prev_url = (page > 1)
        .then(|| with_page(&state.app_url, &uri, page - 1))
        .flatten();
    let next_url = (page < result.total_pages)
        .then(|| with_page(&state.app_url, &uri, page + 1))
        .flatten();

    Ok((
        StatusCode::OK,
        Json(CampgroundIndexDto {
            campgrounds: result
                .campgrounds
                .into_iter()
                .map(|c| c.into_dto(&state.base_path))
                .collect(),
            page,
            limit,
            total: result.total,
            total_pages: result.total_pages,
            prev_url,
            next_url,
            filters,
            favorites,
        }),
    ))
}

/// Find campgrounds near a point.
///
/// Results carry their distance in meters and come in pages of twelve. Without
/// coordinates and a radius the result is empty and carries a notice.
///
/// # Returns
/// - `200 OK` - Nearby campgrounds, or an empty result with a notice
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campgrounds/nearby",
    tag = CAMPGROUND_TAG,
    params(NearbyParams),
    responses(
        (status = 200, description = "Nearby campgrounds", body = NearbyDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_nearby_campgrounds(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<NearbyParams>,
) -> Result<impl IntoResponse, AppError> {
    let filters = params.filters();
    let favorites = current_favorites(&state, &session).await?;

    let Some(query) = params.to_query() else {
        return Ok((
            StatusCode::OK,
            Json(NearbyDto {
                campgrounds: vec![],
                page: params.page(),
                total: 0,
                total_pages: 1,
                notice: Some(NEARBY_NOTICE.to_string()),
                filters,
                favorites,
            }),
        ));
    };

    let page = query.page;
    let result = CampgroundService::new(&state.db, &state.cache)
        .get_nearby(query)
        .await?;

    Ok((
        StatusCode::OK,
        Json(NearbyDto {
            campgrounds: result
                .campgrounds
                .into_iter()
                .map(|c| c.into_dto(&state.base_path))
                .collect(),
            page,
            total: result.total,
            total_pages: result.total_pages,
            notice: None,
            filters,
            favorites,
        }),
    ))
}

/// Get a campground by slug or legacy numeric id.
///
/// A numeric id answers with a permanent redirect to the slug URL.
///
/// # Returns
/// - `200 OK` - Campground with author and one page of reviews
/// - `301 Moved Permanently` - Canonical slug URL in `Location`
/// - `404 Not Found` - No campground with that slug or id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campgrounds/{id}",
    tag = CAMPGROUND_TAG,
    params(
        ("id" = String, Path, description = "Campground slug, or numeric id"),
        ShowParams
    ),
    responses(
        (status = 200, description = "Campground detail", body = CampgroundDetailDto),
        (status = 301, description = "Redirect to the canonical slug URL"),
        (status = 404, description = "Campground not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campground(
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
    Query(params): Query<ShowParams>,
) -> Result<Response, AppError> {
    let reviews_page = parse_positive(params.page.as_deref()).unwrap_or(1);

    let lookup = CampgroundService::new(&state.db, &state.cache)
        .get_detail(&id_or_slug, reviews_page)
        .await?;

    match lookup {
        CampgroundLookup::Found(detail) => {
            let detail = *detail;
            let canonical = detail.campground.canonical_path(&state.base_path);

            Ok((
                StatusCode::OK,
                Json(CampgroundDetailDto {
                    campground: detail.campground.into_dto(&state.base_path),
                    author: detail.author.map(|a| a.into_dto()),
                    reviews: detail
                        .reviews
                        .reviews
                        .into_iter()
                        .map(|r| r.into_dto())
                        .collect(),
                    reviews_page: detail.reviews.page,
                    reviews_limit: REVIEWS_PER_PAGE,
                    reviews_total_pages: detail.reviews.total_pages,
                    canonical,
                }),
            )
                .into_response())
        }
        CampgroundLookup::Moved(campground) => {
            Ok(Redirect::permanent(&campground.canonical_path(&state.base_path)).into_response())
        }
        CampgroundLookup::NotFound => Err(AppError::NotFound("Campground not found".to_string())),
    }
}

/// Create a campground.
///
/// The location is geocoded and any attached images are uploaded before the
/// campground is saved under a slug derived from its title.
///
/// # Access Control
/// - Signed in user; becomes the author
///
/// # Returns
/// - `201 Created` - Created campground
/// - `400 Bad Request` - Validation failure or unknown location
/// - `401 Unauthorized` - Not signed in
/// - `500 Internal Server Error` - Geocoding not configured, upload or database error
#[utoipa::path(
    post,
    path = "/campgrounds",
    tag = CAMPGROUND_TAG,
    request_body(content = CampgroundFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Created campground", body = CampgroundDto),
        (status = 400, description = "Invalid campground data or location", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_campground(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .with_return_to(uri.to_string())
        .require(&[])
        .await?;

    let submission = read_submission(multipart).await?;
    let fields = validate_campground(&submission.form)?;

    let geocoding = GeocodingService::new(&state.http_client, &state.mapbox, &state.cache);
    geocoding.ensure_configured()?;
    let geometry = geocoding.forward(&fields.location).await?;

    let images = MediaService::new(&state.http_client, state.cloudinary.as_ref())
        .upload(submission.files)
        .await?;

    let campground = CampgroundService::new(&state.db, &state.cache)
        .create(CreateCampgroundParams {
            fields,
            geometry,
            author_id: user.id,
            images,
        })
        .await?;

    FlashSession::new(&session)
        .success("Successfully created campground!")
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(campground.into_dto(&state.base_path)),
    ))
}

/// Update a campground.
///
/// Replaces the text fields, re-geocoding when the location changed. New images
/// are appended; images named in `deleteImages[]` are removed here and on the
/// media host.
///
/// # Access Control
/// - Campground author
///
/// # Returns
/// - `200 OK` - Updated campground
/// - `400 Bad Request` - Validation failure or unknown location
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Not the author
/// - `404 Not Found` - Campground not found
/// - `500 Internal Server Error` - Geocoding not configured, upload or database error
#[utoipa::path(
    put,
    path = "/campgrounds/{id}",
    tag = CAMPGROUND_TAG,
    params(("id" = i32, Path, description = "Campground id")),
    request_body(content = CampgroundFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Updated campground", body = CampgroundDto),
        (status = 400, description = "Invalid campground data or location", body = ErrorDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Campground not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_campground(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .with_return_to(uri.to_string())
        .require(&[Permission::CampgroundAuthor(id)])
        .await?;

    let submission = read_submission(multipart).await?;
    let fields = validate_campground(&submission.form)?;

    let campground_service = CampgroundService::new(&state.db, &state.cache);
    let existing = campground_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Campground not found".to_string()))?;

    let geometry = if location_changed(&existing.location, &fields.location) {
        let geocoding = GeocodingService::new(&state.http_client, &state.mapbox, &state.cache);
        geocoding.ensure_configured()?;
        Some(geocoding.forward(&fields.location).await?)
    } else {
        None
    };

    // Only images attached to this campground may be removed
    let delete_images: Vec<String> = submission
        .delete_images
        .into_iter()
        .filter(|filename| existing.images.iter().any(|i| &i.filename == filename))
        .collect();

    let media = MediaService::new(&state.http_client, state.cloudinary.as_ref());
    let new_images = media.upload(submission.files).await?;

    let campground = campground_service
        .update(UpdateCampgroundParams {
            id,
            fields,
            geometry,
            new_images,
            delete_images: delete_images.clone(),
        })
        .await?
        .ok_or_else(|| AppError::NotFound("Campground not found".to_string()))?;

    media.destroy(&delete_images).await;

    FlashSession::new(&session)
        .success("Successfully updated campground!")
        .await?;

    Ok((
        StatusCode::OK,
        Json(campground.into_dto(&state.base_path)),
    ))
}

/// Delete a campground with its reviews, images and favorite references.
///
/// # Access Control
/// - Campground author
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Not the author
/// - `404 Not Found` - Campground not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/campgrounds/{id}",
    tag = CAMPGROUND_TAG,
    params(("id" = i32, Path, description = "Campground id")),
    responses(
        (status = 204, description = "Campground deleted"),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Campground not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_campground(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .with_return_to(uri.to_string())
        .require(&[Permission::CampgroundAuthor(id)])
        .await?;

    if !CampgroundService::new(&state.db, &state.cache)
        .delete(id)
        .await?
    {
        return Err(AppError::NotFound("Campground not found".to_string()));
    }

    FlashSession::new(&session)
        .success("Successfully deleted campground")
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the signed in user's favorite campgrounds.
///
/// # Access Control
/// - Signed in user
///
/// # Returns
/// - `200 OK` - Favorite campgrounds, most recently added first
/// - `401 Unauthorized` - Not signed in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campgrounds/favorites",
    tag = CAMPGROUND_TAG,
    responses(
        (status = 200, description = "Favorite campgrounds", body = FavoritesDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .with_return_to(uri.to_string())
        .require(&[])
        .await?;

    let campgrounds = FavoriteService::new(&state.db).list(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(FavoritesDto {
            total: campgrounds.len() as u64,
            campgrounds: campgrounds
                .into_iter()
                .map(|c| c.into_dto(&state.base_path))
                .collect(),
        }),
    ))
}

/// Add a campground to the user's favorites, or remove it if already there.
///
/// # Access Control
/// - Signed in user
///
/// # Returns
/// - `200 OK` - `added` or `removed`
/// - `401 Unauthorized` - Not signed in
/// - `404 Not Found` - Campground not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/campgrounds/{id}/favorite",
    tag = CAMPGROUND_TAG,
    params(("id" = i32, Path, description = "Campground id")),
    responses(
        (status = 200, description = "Favorite toggled", body = FavoriteStatusDto),
        (status = 401, description = "User not signed in", body = ErrorDto),
        (status = 404, description = "Campground not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    session: Session,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .with_return_to(uri.to_string())
        .require(&[])
        .await?;

    let status = FavoriteService::new(&state.db).toggle(user.id, id).await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteStatusDto {
            status: status.as_str().to_string(),
        }),
    ))
}

/// Favorite ids of the signed in user, empty when signed out.
async fn current_favorites(state: &AppState, session: &Session) -> Result<Vec<i32>, AppError> {
    let Some(user) = AuthGuard::new(&state.db, session).current_user().await? else {
        return Ok(vec![]);
    };

    FavoriteService::new(&state.db).get_ids(user.id).await
}

/// Reads the campground form fields, image files and image deletions.
///
/// Empty file parts, as sent by browsers when no file was chosen, are skipped.
async fn read_submission(mut multipart: Multipart) -> Result<CampgroundSubmission, AppError> {
    let mut submission = CampgroundSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "image" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;

            if !bytes.is_empty() {
                submission.files.push(UploadedFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        match name.as_str() {
            "campground[title]" => submission.form.title = Some(value),
            "campground[price]" => submission.form.price = Some(value),
            "campground[description]" => submission.form.description = Some(value),
            "campground[location]" => submission.form.location = Some(value),
            "deleteImages[]" | "deleteImages" => submission.delete_images.push(value),
            _ => {}
        }
    }

    Ok(submission)
}

/// Parses a finite number, ignoring blanks and garbage.
fn parse_finite(value: Option<&str>) -> Option<f64> {
    value?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Surrounding whitespace on either side is not a change worth re-geocoding.
fn location_changed(stored: &str, submitted: &str) -> bool {
    stored.trim() != submitted.trim()
}

/// Parses a whole number of at least one.
fn parse_positive(value: Option<&str>) -> Option<u64> {
    value?.trim().parse::<u64>().ok().filter(|v| *v >= 1)
}
