//! Robots file and XML sitemap.

use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::server::{
    error::AppError,
    model::campground::SitemapEntry,
    service::{cache::Cache, campground::CampgroundService},
    util::{html::escape_html, url::join_path},
};

const SITEMAP_CACHE_KEY: &str = "seo:sitemap";

const SITEMAP_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

const STATIC_PATHS: [&str; 4] = [
    "/",
    "/campgrounds",
    "/campgrounds/nearby",
    "/campgrounds/favorites",
];

pub struct SeoService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a Cache,
    app_url: &'a str,
    base_path: &'a str,
}

impl<'a> SeoService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        cache: &'a Cache,
        app_url: &'a str,
        base_path: &'a str,
    ) -> Self {
        Self {
            db,
            cache,
            app_url,
            base_path,
        }
    }

    /// Allows crawling under the base path except the auth forms.
    pub fn robots_txt(&self) -> String {
        [
            "User-agent: *".to_string(),
            format!("Allow: {}", join_path(self.base_path, "/")),
            format!("Disallow: {}", join_path(self.base_path, "/login")),
            format!("Disallow: {}", join_path(self.base_path, "/register")),
            format!("Sitemap: {}", self.absolute("/sitemap.xml")),
            String::new(),
        ]
        .join("\n")
    }

    /// Sitemap of the static pages followed by every campground, cached for five minutes.
    pub async fn sitemap_xml(&self) -> Result<String, AppError> {
        self.cache
            .get_or_set(SITEMAP_CACHE_KEY, SITEMAP_CACHE_TTL, || async {
                let entries = CampgroundService::new(self.db, self.cache)
                    .get_sitemap_entries()
                    .await?;
                Ok::<_, AppError>(self.render_sitemap(&entries))
            })
            .await
    }

    fn render_sitemap(&self, entries: &[SitemapEntry]) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">",
        );

        for path in STATIC_PATHS {
            xml.push_str(&format!(
                "<url><loc>{}</loc><changefreq>weekly</changefreq><priority>0.7</priority></url>",
                escape_html(&self.absolute(path))
            ));
        }

        for entry in entries {
            xml.push_str(&format!(
                "<url><loc>{}</loc><lastmod>{}</lastmod><changefreq>weekly</changefreq><priority>0.8</priority></url>",
                escape_html(&self.absolute(&format!("/campgrounds/{}", entry.slug))),
                entry.updated_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
            ));
        }

        xml.push_str("</urlset>");
        xml
    }

    fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.app_url, join_path(self.base_path, path))
    }
}
