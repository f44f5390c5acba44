//! Gallery image records and their request payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A gallery entry. `featured` flags the homepage highlight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub featured: bool,
}

impl GalleryImage {
    pub fn create(new: NewGalleryImage) -> Self {
        Self {
            id: super::next_id(),
            url: new.url,
            title: new.title,
            description: new.description,
            featured: new.featured,
        }
    }

    /// Merge a partial update into this record.
    pub fn apply(&mut self, update: UpdateGalleryImage) {
        if let Some(url) = update.url {
            self.url = url;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
    }
}

/// Admin payload for adding a gallery entry
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewGalleryImage {
    #[validate(url(message = "url must be a valid URL"))]
    pub url: String,
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    #[validate(length(max = 2000))]
    pub description: String,
    #[serde(default)]
    pub featured: bool,
}

/// Admin edit payload: any subset of fields may be supplied
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGalleryImage {
    #[validate(url)]
    pub url: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub featured: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_featured_toggle_leaves_other_fields_alone() {
        let mut image = GalleryImage::create(NewGalleryImage {
            url: "https://example.com/lake.jpg".to_string(),
            title: "Lakeside View".to_string(),
            description: "Sunrise over the lake".to_string(),
            featured: false,
        });
        image.apply(UpdateGalleryImage {
            featured: Some(true),
            ..Default::default()
        });
        assert!(image.featured);
        assert_eq!(image.title, "Lakeside View");
        assert_eq!(image.url, "https://example.com/lake.jpg");
    }
}
