//! In-memory storage backend.
//!
//! The development stand-in for the production database: collections live in
//! `RwLock`-guarded vectors seeded with the fixed first-run records. Writers
//! serialize through the locks; last write wins, which matches the shared
//! single-store semantics the storefront always had.

use crate::models::{
    ContactDraft, ContactRequest, GalleryImage, NewGalleryImage, NewReview, PricingOption, Review,
    UpdateContactRequest, UpdateGalleryImage, UpdatePricingOption, UpdateReview,
};
use crate::storage::seed;
use tokio::sync::RwLock;

pub struct MemoryStore {
    reviews: RwLock<Vec<Review>>,
    pricing: RwLock<Vec<PricingOption>>,
    gallery: RwLock<Vec<GalleryImage>>,
    contacts: RwLock<Vec<ContactRequest>>,
    dark_mode: RwLock<bool>,
}

impl MemoryStore {
    /// Create a store populated with the fixed seed collections.
    pub fn new() -> Self {
        Self {
            reviews: RwLock::new(seed::reviews()),
            pricing: RwLock::new(seed::pricing()),
            gallery: RwLock::new(seed::gallery()),
            contacts: RwLock::new(Vec::new()),
            dark_mode: RwLock::new(false),
        }
    }

    // ─── Reviews ───

    pub async fn list_reviews(&self, published_only: bool) -> Vec<Review> {
        let reviews = self.reviews.read().await;
        let mut reviews: Vec<_> = reviews
            .iter()
            .filter(|r| !published_only || r.published)
            .cloned()
            .collect();
        // Newest first, matching the database backend
        reviews.sort_by(|a, b| b.date.cmp(&a.date));
        reviews
    }

    pub async fn add_review(&self, new: NewReview) -> Review {
        let review = Review::create(new);
        let mut reviews = self.reviews.write().await;
        reviews.push(review.clone());
        review
    }

    pub async fn update_review(&self, id: &str, update: UpdateReview) -> Option<Review> {
        let mut reviews = self.reviews.write().await;
        let review = reviews.iter_mut().find(|r| r.id == id)?;
        review.apply(update);
        Some(review.clone())
    }

    pub async fn delete_review(&self, id: &str) -> bool {
        let mut reviews = self.reviews.write().await;
        let before = reviews.len();
        reviews.retain(|r| r.id != id);
        reviews.len() < before
    }

    // ─── Pricing ───

    pub async fn list_pricing(&self) -> Vec<PricingOption> {
        let mut pricing: Vec<_> = self.pricing.read().await.clone();
        pricing.sort_by(|a, b| a.price_per_night.total_cmp(&b.price_per_night));
        pricing
    }

    pub async fn get_pricing(&self, id: &str) -> Option<PricingOption> {
        let pricing = self.pricing.read().await;
        pricing.iter().find(|p| p.id == id).cloned()
    }

    pub async fn update_pricing(&self, id: &str, update: UpdatePricingOption) -> Option<PricingOption> {
        let mut pricing = self.pricing.write().await;
        let option = pricing.iter_mut().find(|p| p.id == id)?;
        option.apply(update);
        Some(option.clone())
    }

    // ─── Gallery ───

    pub async fn list_gallery(&self, featured_only: bool) -> Vec<GalleryImage> {
        let gallery = self.gallery.read().await;
        gallery
            .iter()
            .filter(|img| !featured_only || img.featured)
            .cloned()
            .collect()
    }

    pub async fn add_gallery_image(&self, new: NewGalleryImage) -> GalleryImage {
        let image = GalleryImage::create(new);
        let mut gallery = self.gallery.write().await;
        gallery.push(image.clone());
        image
    }

    pub async fn update_gallery_image(
        &self,
        id: &str,
        update: UpdateGalleryImage,
    ) -> Option<GalleryImage> {
        let mut gallery = self.gallery.write().await;
        let image = gallery.iter_mut().find(|img| img.id == id)?;
        image.apply(update);
        Some(image.clone())
    }

    pub async fn delete_gallery_image(&self, id: &str) -> bool {
        let mut gallery = self.gallery.write().await;
        let before = gallery.len();
        gallery.retain(|img| img.id != id);
        gallery.len() < before
    }

    // ─── Contact requests ───

    pub async fn list_contacts(&self) -> Vec<ContactRequest> {
        self.contacts.read().await.clone()
    }

    pub async fn add_contact(&self, draft: ContactDraft) -> ContactRequest {
        let request = ContactRequest::create(draft);
        let mut contacts = self.contacts.write().await;
        contacts.push(request.clone());
        request
    }

    pub async fn update_contact(
        &self,
        id: &str,
        update: UpdateContactRequest,
    ) -> Option<ContactRequest> {
        let mut contacts = self.contacts.write().await;
        let request = contacts.iter_mut().find(|c| c.id == id)?;
        request.apply(update);
        Some(request.clone())
    }

    pub async fn delete_contact(&self, id: &str) -> bool {
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        contacts.len() < before
    }

    // ─── Site preferences ───

    pub async fn dark_mode(&self) -> bool {
        *self.dark_mode.read().await
    }

    pub async fn set_dark_mode(&self, enabled: bool) {
        *self.dark_mode.write().await = enabled;
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RequestType;
    use pretty_assertions::assert_eq;

    fn new_review(name: &str) -> NewReview {
        NewReview {
            name: name.to_string(),
            rating: 4,
            comment: "Great weekend".to_string(),
        }
    }

    #[tokio::test]
    async fn test_seeded_collections() {
        let store = MemoryStore::new();
        assert_eq!(store.list_reviews(false).await.len(), 3);
        assert_eq!(store.list_pricing().await.len(), 4);
        assert_eq!(store.list_gallery(false).await.len(), 6);
        assert!(store.list_contacts().await.is_empty());
        assert!(!store.dark_mode().await);
    }

    #[tokio::test]
    async fn test_reviews_listed_newest_first() {
        let store = MemoryStore::new();
        let created = store.add_review(new_review("Alex Chen")).await;

        let reviews = store.list_reviews(false).await;
        // Today's submission outranks the seeded dates
        assert_eq!(reviews[0].id, created.id);
        for pair in reviews.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[tokio::test]
    async fn test_pricing_listed_by_nightly_rate() {
        let store = MemoryStore::new();
        let rates: Vec<f64> = store
            .list_pricing()
            .await
            .iter()
            .map(|p| p.price_per_night)
            .collect();
        assert_eq!(rates, vec![35.0, 55.0, 95.0, 165.0]);
    }

    #[tokio::test]
    async fn test_added_review_enters_moderation_queue() {
        let store = MemoryStore::new();
        let created = store.add_review(new_review("Alex Chen")).await;
        assert!(!created.published);

        // Not visible publicly until a moderator publishes it
        assert_eq!(store.list_reviews(true).await.len(), 3);
        assert_eq!(store.list_reviews(false).await.len(), 4);

        store
            .update_review(
                &created.id,
                UpdateReview {
                    published: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(store.list_reviews(true).await.len(), 4);
    }

    #[tokio::test]
    async fn test_delete_missing_id_leaves_collection_unchanged() {
        let store = MemoryStore::new();
        assert!(!store.delete_review("does-not-exist").await);
        assert_eq!(store.list_reviews(false).await.len(), 3);

        assert!(store.delete_review("1").await);
        assert_eq!(store.list_reviews(false).await.len(), 2);
    }

    #[tokio::test]
    async fn test_featured_toggle_is_isolated() {
        let store = MemoryStore::new();
        let before = store.list_gallery(false).await;

        store
            .update_gallery_image(
                "2",
                UpdateGalleryImage {
                    featured: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let after = store.list_gallery(false).await;
        for (old, new) in before.iter().zip(after.iter()) {
            if old.id == "2" {
                assert!(new.featured);
                assert_eq!(old.title, new.title);
            } else {
                assert_eq!(old.featured, new.featured);
            }
        }
        assert_eq!(store.list_gallery(true).await.len(), 4);
    }

    #[tokio::test]
    async fn test_update_missing_ids_signal_not_found() {
        let store = MemoryStore::new();
        assert!(store
            .update_pricing("99", UpdatePricingOption::default())
            .await
            .is_none());
        assert!(store
            .update_gallery_image("99", UpdateGalleryImage::default())
            .await
            .is_none());
        assert!(store
            .update_contact("99", UpdateContactRequest::default())
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_contact_lifecycle() {
        let store = MemoryStore::new();
        let created = store
            .add_contact(ContactDraft {
                name: "Jordan Lee".to_string(),
                email: "jordan@example.com".to_string(),
                phone: Some("555-0100".to_string()),
                message: "Quote please".to_string(),
                request_type: RequestType::Quote,
            })
            .await;
        assert!(!created.responded);

        let updated = store
            .update_contact(
                &created.id,
                UpdateContactRequest {
                    responded: Some(true),
                },
            )
            .await
            .unwrap();
        assert!(updated.responded);

        assert!(store.delete_contact(&created.id).await);
        assert!(store.list_contacts().await.is_empty());
    }

    #[tokio::test]
    async fn test_dark_mode_persists() {
        let store = MemoryStore::new();
        store.set_dark_mode(true).await;
        assert!(store.dark_mode().await);
    }
}
