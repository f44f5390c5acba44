//! Storage layer.
//!
//! One collection contract — list / add / update / delete per record kind —
//! with two backends behind it: an in-memory store for development and a
//! PostgreSQL store for production, selected by configuration at startup.
//! Updates on absent ids come back as `None` and deletes report whether a
//! record was actually removed; callers decide how to surface that.

mod memory;
mod postgres;
pub mod seed;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::AppError;
use crate::models::{
    ContactDraft, ContactRequest, GalleryImage, NewGalleryImage, NewReview, PricingOption, Review,
    UpdateContactRequest, UpdateGalleryImage, UpdatePricingOption, UpdateReview,
};

/// The configured storage backend.
pub enum Datastore {
    Memory(MemoryStore),
    Postgres(PgStore),
}

impl Datastore {
    pub async fn list_reviews(&self, published_only: bool) -> Result<Vec<Review>, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.list_reviews(published_only).await),
            Datastore::Postgres(store) => store.list_reviews(published_only).await,
        }
    }

    pub async fn add_review(&self, new: NewReview) -> Result<Review, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.add_review(new).await),
            Datastore::Postgres(store) => store.add_review(new).await,
        }
    }

    pub async fn update_review(
        &self,
        id: &str,
        update: UpdateReview,
    ) -> Result<Option<Review>, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.update_review(id, update).await),
            Datastore::Postgres(store) => store.update_review(id, update).await,
        }
    }

    pub async fn delete_review(&self, id: &str) -> Result<bool, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.delete_review(id).await),
            Datastore::Postgres(store) => store.delete_review(id).await,
        }
    }

    pub async fn list_pricing(&self) -> Result<Vec<PricingOption>, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.list_pricing().await),
            Datastore::Postgres(store) => store.list_pricing().await,
        }
    }

    pub async fn get_pricing(&self, id: &str) -> Result<Option<PricingOption>, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.get_pricing(id).await),
            Datastore::Postgres(store) => store.get_pricing(id).await,
        }
    }

    pub async fn update_pricing(
        &self,
        id: &str,
        update: UpdatePricingOption,
    ) -> Result<Option<PricingOption>, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.update_pricing(id, update).await),
            Datastore::Postgres(store) => store.update_pricing(id, update).await,
        }
    }

    pub async fn list_gallery(&self, featured_only: bool) -> Result<Vec<GalleryImage>, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.list_gallery(featured_only).await),
            Datastore::Postgres(store) => store.list_gallery(featured_only).await,
        }
    }

    pub async fn add_gallery_image(&self, new: NewGalleryImage) -> Result<GalleryImage, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.add_gallery_image(new).await),
            Datastore::Postgres(store) => store.add_gallery_image(new).await,
        }
    }

    pub async fn update_gallery_image(
        &self,
        id: &str,
        update: UpdateGalleryImage,
    ) -> Result<Option<GalleryImage>, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.update_gallery_image(id, update).await),
            Datastore::Postgres(store) => store.update_gallery_image(id, update).await,
        }
    }

    pub async fn delete_gallery_image(&self, id: &str) -> Result<bool, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.delete_gallery_image(id).await),
            Datastore::Postgres(store) => store.delete_gallery_image(id).await,
        }
    }

    pub async fn list_contacts(&self) -> Result<Vec<ContactRequest>, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.list_contacts().await),
            Datastore::Postgres(store) => store.list_contacts().await,
        }
    }

    pub async fn add_contact(&self, draft: ContactDraft) -> Result<ContactRequest, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.add_contact(draft).await),
            Datastore::Postgres(store) => store.add_contact(draft).await,
        }
    }

    pub async fn update_contact(
        &self,
        id: &str,
        update: UpdateContactRequest,
    ) -> Result<Option<ContactRequest>, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.update_contact(id, update).await),
            Datastore::Postgres(store) => store.update_contact(id, update).await,
        }
    }

    pub async fn delete_contact(&self, id: &str) -> Result<bool, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.delete_contact(id).await),
            Datastore::Postgres(store) => store.delete_contact(id).await,
        }
    }

    pub async fn dark_mode(&self) -> Result<bool, AppError> {
        match self {
            Datastore::Memory(store) => Ok(store.dark_mode().await),
            Datastore::Postgres(store) => store.dark_mode().await,
        }
    }

    pub async fn set_dark_mode(&self, enabled: bool) -> Result<(), AppError> {
        match self {
            Datastore::Memory(store) => {
                store.set_dark_mode(enabled).await;
                Ok(())
            }
            Datastore::Postgres(store) => store.set_dark_mode(enabled).await,
        }
    }
}
