//! Image storage on the Cloudinary media host.
//!
//! Requests are signed with the account's API secret: parameters other than the
//! file and key are sorted, joined as `k=v` pairs with `&`, suffixed with the secret
//! and hashed with SHA-256.

use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::server::{
    config::CloudinaryConfig,
    error::{external::ExternalError, AppError},
    model::campground::NewImage,
};

/// An image file received from a client, not yet stored anywhere.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorMessage,
}

#[derive(Deserialize)]
struct ErrorMessage {
    message: String,
}

pub struct MediaService<'a> {
    http_client: &'a reqwest::Client,
    config: Option<&'a CloudinaryConfig>,
}

impl<'a> MediaService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: Option<&'a CloudinaryConfig>) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Uploads files in order, returning the stored images.
    ///
    /// # Returns
    /// - `Ok(Vec<NewImage>)` - One image per file; empty input needs no configuration
    /// - `Err(ExternalError::MediaNotConfigured)` - Files given but no credentials set
    /// - `Err(ExternalError::Media)` - The host rejected an upload
    pub async fn upload(&self, files: Vec<UploadedFile>) -> Result<Vec<NewImage>, AppError> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let config = self.config.ok_or(ExternalError::MediaNotConfigured)?;
        let url = format!(
            "{}/v1_1/{}/image/upload",
            config.api_url.trim_end_matches('/'),
            config.cloud_name
        );

        let mut images = Vec::with_capacity(files.len());
        for file in files {
            let timestamp = Utc::now().timestamp().to_string();
            let signature = sign(
                &[("folder", &config.folder), ("timestamp", &timestamp)],
                &config.api_secret,
            );

            let mut part = Part::bytes(file.bytes).file_name(file.file_name.clone());
            if let Some(content_type) = file.content_type.as_deref() {
                part = part.mime_str(content_type)?;
            }

            let form = Form::new()
                .part("file", part)
                .text("api_key", config.api_key.clone())
                .text("timestamp", timestamp)
                .text("folder", config.folder.clone())
                .text("signature", signature);

            let response = self.http_client.post(&url).multipart(form).send().await?;
            if !response.status().is_success() {
                return Err(ExternalError::Media(error_message(response).await).into());
            }

            let uploaded: UploadResponse = response.json().await?;
            tracing::debug!("Uploaded {} as {}", file.file_name, uploaded.public_id);

            images.push(NewImage {
                url: uploaded.secure_url,
                filename: uploaded.public_id,
                alt: None,
            });
        }

        Ok(images)
    }

    /// Destroys stored images by public id.
    ///
    /// Failures are logged and skipped so a campground edit is never blocked by the
    /// media host; the images are detached locally either way.
    pub async fn destroy(&self, filenames: &[String]) {
        if filenames.is_empty() {
            return;
        }

        let Some(config) = self.config else {
            tracing::warn!(
                "Media host not configured, {} image(s) detached without remote deletion",
                filenames.len()
            );
            return;
        };

        let url = format!(
            "{}/v1_1/{}/image/destroy",
            config.api_url.trim_end_matches('/'),
            config.cloud_name
        );

        for filename in filenames {
            if let Err(e) = self.destroy_one(config, &url, filename).await {
                tracing::warn!("Failed to destroy image {}: {}", filename, e);
            }
        }
    }

    async fn destroy_one(
        &self,
        config: &CloudinaryConfig,
        url: &str,
        filename: &str,
    ) -> Result<(), AppError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign(
            &[("public_id", filename), ("timestamp", &timestamp)],
            &config.api_secret,
        );

        let response = self
            .http_client
            .post(url)
            .form(&[
                ("public_id", filename),
                ("timestamp", &timestamp),
                ("api_key", &config.api_key),
                ("signature", &signature),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExternalError::Media(error_message(response).await).into());
        }

        Ok(())
    }
}

/// Signs request parameters for the media host.
pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Extracts the host's error message, falling back to the HTTP status.
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => format!("{} ({})", body.error.message, status),
        Err(_) => format!("unexpected status {}", status),
    }
}
