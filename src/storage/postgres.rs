//! PostgreSQL storage backend.
//!
//! Production storage behind the same collection contract as the in-memory
//! store. Supports hosted providers that require TLS. Tables are created on
//! startup if absent and seeded only when empty, so initialization is
//! idempotent.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::models::{
    ContactDraft, ContactRequest, GalleryImage, NewGalleryImage, NewReview, PricingOption,
    RequestType, Review, UpdateContactRequest, UpdateGalleryImage, UpdatePricingOption,
    UpdateReview,
};
use crate::storage::seed;
use deadpool_postgres::{ManagerConfig, Pool, PoolConfig, RecyclingMethod};
use tokio_postgres::Row;
use tracing::info;

pub struct PgStore {
    pool: Pool,
}

impl PgStore {
    /// Connect to the configured database, create missing tables, and seed
    /// empty collections.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = build_pool(config)?;
        let store = Self { pool };
        store.init_schema().await?;
        store.seed_if_empty().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), AppError> {
        let client = self.pool.get().await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    rating SMALLINT NOT NULL,
                    comment TEXT NOT NULL,
                    date TEXT NOT NULL,
                    published BOOLEAN NOT NULL DEFAULT FALSE
                )",
                &[],
            )
            .await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS pricing_options (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    description TEXT NOT NULL,
                    price_per_night DOUBLE PRECISION NOT NULL,
                    features TEXT[] NOT NULL DEFAULT '{}'
                )",
                &[],
            )
            .await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS gallery_images (
                    id TEXT PRIMARY KEY,
                    url TEXT NOT NULL,
                    title TEXT NOT NULL,
                    description TEXT NOT NULL,
                    featured BOOLEAN NOT NULL DEFAULT FALSE
                )",
                &[],
            )
            .await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS contact_requests (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL,
                    phone TEXT,
                    message TEXT NOT NULL,
                    request_type TEXT NOT NULL,
                    date_submitted TEXT NOT NULL,
                    responded BOOLEAN NOT NULL DEFAULT FALSE
                )",
                &[],
            )
            .await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS site_preferences (
                    key TEXT PRIMARY KEY,
                    value BOOLEAN NOT NULL
                )",
                &[],
            )
            .await?;

        info!("Storage tables ready");
        Ok(())
    }

    async fn seed_if_empty(&self) -> Result<(), AppError> {
        let client = self.pool.get().await?;

        let review_count: i64 = client
            .query_one("SELECT COUNT(*) FROM reviews", &[])
            .await?
            .get(0);
        if review_count == 0 {
            for r in seed::reviews() {
                client
                    .execute(
                        "INSERT INTO reviews (id, name, rating, comment, date, published)
                         VALUES ($1, $2, $3, $4, $5, $6)",
                        &[
                            &r.id,
                            &r.name,
                            &(r.rating as i16),
                            &r.comment,
                            &r.date,
                            &r.published,
                        ],
                    )
                    .await?;
            }
            info!("Seeded reviews");
        }

        let pricing_count: i64 = client
            .query_one("SELECT COUNT(*) FROM pricing_options", &[])
            .await?
            .get(0);
        if pricing_count == 0 {
            for p in seed::pricing() {
                client
                    .execute(
                        "INSERT INTO pricing_options (id, name, description, price_per_night, features)
                         VALUES ($1, $2, $3, $4, $5)",
                        &[&p.id, &p.name, &p.description, &p.price_per_night, &p.features],
                    )
                    .await?;
            }
            info!("Seeded pricing catalog");
        }

        let gallery_count: i64 = client
            .query_one("SELECT COUNT(*) FROM gallery_images", &[])
            .await?
            .get(0);
        if gallery_count == 0 {
            for img in seed::gallery() {
                client
                    .execute(
                        "INSERT INTO gallery_images (id, url, title, description, featured)
                         VALUES ($1, $2, $3, $4, $5)",
                        &[&img.id, &img.url, &img.title, &img.description, &img.featured],
                    )
                    .await?;
            }
            info!("Seeded gallery");
        }

        client
            .execute(
                "INSERT INTO site_preferences (key, value) VALUES ('dark_mode', FALSE)
                 ON CONFLICT (key) DO NOTHING",
                &[],
            )
            .await?;

        Ok(())
    }

    // ─── Reviews ───

    pub async fn list_reviews(&self, published_only: bool) -> Result<Vec<Review>, AppError> {
        let client = self.pool.get().await?;
        let rows = if published_only {
            client
                .query(
                    "SELECT id, name, rating, comment, date, published
                     FROM reviews WHERE published ORDER BY date DESC",
                    &[],
                )
                .await?
        } else {
            client
                .query(
                    "SELECT id, name, rating, comment, date, published
                     FROM reviews ORDER BY date DESC",
                    &[],
                )
                .await?
        };
        Ok(rows.iter().map(row_to_review).collect())
    }

    pub async fn add_review(&self, new: NewReview) -> Result<Review, AppError> {
        let review = Review::create(new);
        let client = self.pool.get().await?;
        client
            .execute(
                "INSERT INTO reviews (id, name, rating, comment, date, published)
                 VALUES ($1, $2, $3, $4, $5, $6)",
                &[
                    &review.id,
                    &review.name,
                    &(review.rating as i16),
                    &review.comment,
                    &review.date,
                    &review.published,
                ],
            )
            .await?;
        Ok(review)
    }

    pub async fn update_review(
        &self,
        id: &str,
        update: UpdateReview,
    ) -> Result<Option<Review>, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(
                "SELECT id, name, rating, comment, date, published FROM reviews WHERE id = $1",
                &[&id],
            )
            .await?;
        let Some(row) = row else { return Ok(None) };

        let mut review = row_to_review(&row);
        review.apply(update);
        client
            .execute(
                "UPDATE reviews SET name = $2, rating = $3, comment = $4, published = $5
                 WHERE id = $1",
                &[
                    &review.id,
                    &review.name,
                    &(review.rating as i16),
                    &review.comment,
                    &review.published,
                ],
            )
            .await?;
        Ok(Some(review))
    }

    pub async fn delete_review(&self, id: &str) -> Result<bool, AppError> {
        let client = self.pool.get().await?;
        let deleted = client
            .execute("DELETE FROM reviews WHERE id = $1", &[&id])
            .await?;
        Ok(deleted > 0)
    }

    // ─── Pricing ───

    pub async fn list_pricing(&self) -> Result<Vec<PricingOption>, AppError> {
        let client = self.pool.get().await?;
        let rows = client
            .query(
                "SELECT id, name, description, price_per_night, features
                 FROM pricing_options ORDER BY price_per_night",
                &[],
            )
            .await?;
        Ok(rows.iter().map(row_to_pricing).collect())
    }

    pub async fn get_pricing(&self, id: &str) -> Result<Option<PricingOption>, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(
                "SELECT id, name, description, price_per_night, features
                 FROM pricing_options WHERE id = $1",
                &[&id],
            )
            .await?;
        Ok(row.as_ref().map(row_to_pricing))
    }

    pub async fn update_pricing(
        &self,
        id: &str,
        update: UpdatePricingOption,
    ) -> Result<Option<PricingOption>, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(
                "SELECT id, name, description, price_per_night, features
                 FROM pricing_options WHERE id = $1",
                &[&id],
            )
            .await?;
        let Some(row) = row else { return Ok(None) };

        let mut option = row_to_pricing(&row);
        option.apply(update);
        client
            .execute(
                "UPDATE pricing_options
                 SET name = $2, description = $3, price_per_night = $4, features = $5
                 WHERE id = $1",
                &[
                    &option.id,
                    &option.name,
                    &option.description,
                    &option.price_per_night,
                    &option.features,
                ],
            )
            .await?;
        Ok(Some(option))
    }

    // ─── Gallery ───

    pub async fn list_gallery(&self, featured_only: bool) -> Result<Vec<GalleryImage>, AppError> {
        let client = self.pool.get().await?;
        let rows = if featured_only {
            client
                .query(
                    "SELECT id, url, title, description, featured
                     FROM gallery_images WHERE featured ORDER BY id",
                    &[],
                )
                .await?
        } else {
            client
                .query(
                    "SELECT id, url, title, description, featured
                     FROM gallery_images ORDER BY id",
                    &[],
                )
                .await?
        };
        Ok(rows.iter().map(row_to_gallery).collect())
    }

    pub async fn add_gallery_image(&self, new: NewGalleryImage) -> Result<GalleryImage, AppError> {
        let image = GalleryImage::create(new);
        let client = self.pool.get().await?;
        client
            .execute(
                "INSERT INTO gallery_images (id, url, title, description, featured)
                 VALUES ($1, $2, $3, $4, $5)",
                &[
                    &image.id,
                    &image.url,
                    &image.title,
                    &image.description,
                    &image.featured,
                ],
            )
            .await?;
        Ok(image)
    }

    pub async fn update_gallery_image(
        &self,
        id: &str,
        update: UpdateGalleryImage,
    ) -> Result<Option<GalleryImage>, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(
                "SELECT id, url, title, description, featured FROM gallery_images WHERE id = $1",
                &[&id],
            )
            .await?;
        let Some(row) = row else { return Ok(None) };

        let mut image = row_to_gallery(&row);
        image.apply(update);
        client
            .execute(
                "UPDATE gallery_images SET url = $2, title = $3, description = $4, featured = $5
                 WHERE id = $1",
                &[
                    &image.id,
                    &image.url,
                    &image.title,
                    &image.description,
                    &image.featured,
                ],
            )
            .await?;
        Ok(Some(image))
    }

    pub async fn delete_gallery_image(&self, id: &str) -> Result<bool, AppError> {
        let client = self.pool.get().await?;
        let deleted = client
            .execute("DELETE FROM gallery_images WHERE id = $1", &[&id])
            .await?;
        Ok(deleted > 0)
    }

    // ─── Contact requests ───

    pub async fn list_contacts(&self) -> Result<Vec<ContactRequest>, AppError> {
        let client = self.pool.get().await?;
        let rows = client
            .query(
                "SELECT id, name, email, phone, message, request_type, date_submitted, responded
                 FROM contact_requests ORDER BY date_submitted DESC",
                &[],
            )
            .await?;
        rows.iter().map(row_to_contact).collect()
    }

    pub async fn add_contact(&self, draft: ContactDraft) -> Result<ContactRequest, AppError> {
        let request = ContactRequest::create(draft);
        let client = self.pool.get().await?;
        client
            .execute(
                "INSERT INTO contact_requests
                 (id, name, email, phone, message, request_type, date_submitted, responded)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
                &[
                    &request.id,
                    &request.name,
                    &request.email,
                    &request.phone,
                    &request.message,
                    &request.request_type.as_str(),
                    &request.date_submitted,
                    &request.responded,
                ],
            )
            .await?;
        Ok(request)
    }

    pub async fn update_contact(
        &self,
        id: &str,
        update: UpdateContactRequest,
    ) -> Result<Option<ContactRequest>, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(
                "SELECT id, name, email, phone, message, request_type, date_submitted, responded
                 FROM contact_requests WHERE id = $1",
                &[&id],
            )
            .await?;
        let Some(row) = row else { return Ok(None) };

        let mut request = row_to_contact(&row)?;
        request.apply(update);
        client
            .execute(
                "UPDATE contact_requests SET responded = $2 WHERE id = $1",
                &[&request.id, &request.responded],
            )
            .await?;
        Ok(Some(request))
    }

    pub async fn delete_contact(&self, id: &str) -> Result<bool, AppError> {
        let client = self.pool.get().await?;
        let deleted = client
            .execute("DELETE FROM contact_requests WHERE id = $1", &[&id])
            .await?;
        Ok(deleted > 0)
    }

    // ─── Site preferences ───

    pub async fn dark_mode(&self) -> Result<bool, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(
                "SELECT value FROM site_preferences WHERE key = 'dark_mode'",
                &[],
            )
            .await?;
        Ok(row.map(|r| r.get(0)).unwrap_or(false))
    }

    pub async fn set_dark_mode(&self, enabled: bool) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        client
            .execute(
                "INSERT INTO site_preferences (key, value) VALUES ('dark_mode', $1)
                 ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
                &[&enabled],
            )
            .await?;
        Ok(())
    }
}

/// Build the connection pool for the configured database. Connections are
/// established lazily, so this only validates configuration.
fn build_pool(config: &DatabaseConfig) -> Result<Pool, AppError> {
    let mut cfg = deadpool_postgres::Config::new();
    cfg.host = Some(config.host.clone());
    cfg.port = Some(config.port);
    cfg.user = Some(config.user.clone());
    cfg.password = Some(config.password.clone());
    cfg.dbname = Some(config.database.clone());
    cfg.pool = Some(PoolConfig::new(config.max_pool_size));
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });

    if config.require_tls {
        let certs = rustls_native_certs::load_native_certs();
        let mut root_store = rustls::RootCertStore::empty();
        for cert in certs.certs {
            root_store.add(cert).ok();
        }

        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let tls = tokio_postgres_rustls::MakeRustlsConnect::new(tls_config);
        cfg.create_pool(Some(deadpool_postgres::Runtime::Tokio1), tls)
            .map_err(|e| AppError::Config(format!("Failed to create TLS pool: {}", e)))
    } else {
        cfg.create_pool(
            Some(deadpool_postgres::Runtime::Tokio1),
            tokio_postgres::NoTls,
        )
        .map_err(|e| AppError::Config(format!("Failed to create pool: {}", e)))
    }
}

fn row_to_review(row: &Row) -> Review {
    Review {
        id: row.get(0),
        name: row.get(1),
        rating: row.get::<_, i16>(2) as u8,
        comment: row.get(3),
        date: row.get(4),
        published: row.get(5),
    }
}

fn row_to_pricing(row: &Row) -> PricingOption {
    PricingOption {
        id: row.get(0),
        name: row.get(1),
        description: row.get(2),
        price_per_night: row.get(3),
        features: row.get(4),
    }
}

fn row_to_gallery(row: &Row) -> GalleryImage {
    GalleryImage {
        id: row.get(0),
        url: row.get(1),
        title: row.get(2),
        description: row.get(3),
        featured: row.get(4),
    }
}

fn row_to_contact(row: &Row) -> Result<ContactRequest, AppError> {
    let raw_type: String = row.get(5);
    let request_type = RequestType::parse(&raw_type).ok_or_else(|| {
        AppError::Internal(format!("Unknown request type in storage: {}", raw_type))
    })?;
    Ok(ContactRequest {
        id: row.get(0),
        name: row.get(1),
        email: row.get(2),
        phone: row.get(3),
        message: row.get(4),
        request_type,
        date_submitted: row.get(6),
        responded: row.get(7),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_build_pool_honors_configured_size() {
        let config = DatabaseConfig {
            max_pool_size: 3,
            ..Default::default()
        };
        let pool = build_pool(&config).unwrap();
        assert_eq!(pool.status().max_size, 3);
    }
}
