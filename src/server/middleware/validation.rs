//! Request payload validation.
//!
//! Validators collect every failing rule rather than stopping at the first, and
//! report them together as a single `ValidationError`. Campground and review
//! messages name the offending field by its dotted form label, for example
//! `"campground.title" is required`.

use email_address::EmailAddress;

use crate::{
    model::{review::CreateReviewDto, user::RegisterDto},
    server::{
        error::validation::ValidationError,
        model::{campground::CampgroundFields, user::RegisterParams},
        util::html::contains_html,
    },
};

const USERNAME_MIN_CHARS: usize = 3;
const USERNAME_MAX_CHARS: usize = 30;
const PASSWORD_MIN_CHARS: usize = 8;

/// Campground text fields as they arrive from the multipart form.
#[derive(Debug, Clone, Default)]
pub struct CampgroundForm {
    pub title: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// Validates a submitted campground.
///
/// Strings are required, must not be empty and must not contain HTML. Price must
/// parse as a finite number of at least zero.
///
/// # Returns
/// - `Ok(CampgroundFields)` - Validated fields
/// - `Err(ValidationError)` - One message per failed rule
pub fn validate_campground(form: &CampgroundForm) -> Result<CampgroundFields, ValidationError> {
    let mut messages = Vec::new();

    let title = required_text("campground.title", form.title.as_deref(), &mut messages);
    let price = price("campground.price", form.price.as_deref(), &mut messages);
    let location = required_text("campground.location", form.location.as_deref(), &mut messages);
    let description = required_text(
        "campground.description",
        form.description.as_deref(),
        &mut messages,
    );

    match (title, price, description, location) {
        (Some(title), Some(price), Some(description), Some(location)) if messages.is_empty() => {
            Ok(CampgroundFields {
                title,
                price,
                description,
                location,
            })
        }
        _ => Err(ValidationError::new(messages)),
    }
}

/// Validates a submitted review, returning its rating and body.
///
/// Rating must be a whole number from 1 to 5. Body is required and must not
/// contain HTML.
pub fn validate_review(payload: &CreateReviewDto) -> Result<(i32, String), ValidationError> {
    let Some(review) = payload.review.as_ref() else {
        return Err(ValidationError::new(vec![
            "\"review\" is required".to_string()
        ]));
    };

    let mut messages = Vec::new();

    let rating = match review.rating {
        None => {
            messages.push("\"review.rating\" is required".to_string());
            None
        }
        Some(rating) if !rating.is_finite() || rating.fract() != 0.0 => {
            messages.push("\"review.rating\" must be an integer".to_string());
            None
        }
        Some(rating) if rating < 1.0 => {
            messages.push("\"review.rating\" must be greater than or equal to 1".to_string());
            None
        }
        Some(rating) if rating > 5.0 => {
            messages.push("\"review.rating\" must be less than or equal to 5".to_string());
            None
        }
        Some(rating) => Some(rating as i32),
    };

    let body = required_text("review.body", review.body.as_deref(), &mut messages);

    match (rating, body) {
        (Some(rating), Some(body)) if messages.is_empty() => Ok((rating, body)),
        _ => Err(ValidationError::new(messages)),
    }
}

/// Validates a registration form.
///
/// The username is trimmed and must be 3 to 30 letters, digits or underscores.
/// The email is trimmed and lowercased before its format is checked. The password
/// must be at least 8 characters of letters and digits, with at least one of each.
pub fn validate_registration(payload: &RegisterDto) -> Result<RegisterParams, ValidationError> {
    let mut messages = Vec::new();

    let username = payload.username.as_deref().unwrap_or_default().trim();
    let username_len = username.chars().count();
    if !(USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&username_len) {
        messages.push("Username must be between 3 and 30 characters.".to_string());
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
        || username.is_empty()
    {
        messages.push(
            "Username can only contain letters, numbers, and underscores.".to_string(),
        );
    }

    let email = normalize_email(payload.email.as_deref().unwrap_or_default());
    if !EmailAddress::is_valid(&email) {
        messages.push("Please enter a valid email address.".to_string());
    }

    let password = payload.password.as_deref().unwrap_or_default().trim();
    if password.chars().count() < PASSWORD_MIN_CHARS {
        messages.push("Password must be at least 8 characters.".to_string());
    }
    let letters_and_digits_only = password.chars().all(|c| c.is_ascii_alphanumeric());
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(letters_and_digits_only && has_letter && has_digit) {
        messages.push("Password must contain letters and numbers.".to_string());
    }

    if !messages.is_empty() {
        return Err(ValidationError::new(messages));
    }

    Ok(RegisterParams {
        username: username.to_string(),
        email,
        password: password.to_string(),
    })
}

/// Trims and lowercases an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn required_text(label: &str, value: Option<&str>, messages: &mut Vec<String>) -> Option<String> {
    let Some(value) = value else {
        messages.push(format!("\"{}\" is required", label));
        return None;
    };

    if value.trim().is_empty() {
        messages.push(format!("\"{}\" is not allowed to be empty", label));
        return None;
    }

    if contains_html(value) {
        messages.push(format!("\"{}\" must not include HTML!", label));
        return None;
    }

    Some(value.to_string())
}

fn price(label: &str, value: Option<&str>, messages: &mut Vec<String>) -> Option<f64> {
    let Some(value) = value else {
        messages.push(format!("\"{}\" is required", label));
        return None;
    };

    match value.trim().parse::<f64>() {
        Ok(price) if !price.is_finite() => {
            messages.push(format!("\"{}\" must be a number", label));
            None
        }
        Ok(price) if price < 0.0 => {
            messages.push(format!("\"{}\" must be greater than or equal to 0", label));
            None
        }
        Ok(price) => Some(price),
        Err(_) => {
            messages.push(format!("\"{}\" must be a number", label));
            None
        }
    }
}
