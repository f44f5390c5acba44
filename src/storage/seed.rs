//! Fixed seed records for first-run initialization.
//!
//! Both backends start from the same catalog: three published reviews, four
//! pricing tiers, six gallery images, and an empty contact inbox. Seeding
//! only ever runs against an empty collection; existing data is never
//! touched.

use crate::models::{GalleryImage, PricingOption, Review};

pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            rating: 5,
            comment: "The most peaceful camping experience I've ever had. The facilities were clean and the staff was incredibly friendly!".to_string(),
            date: "2025-03-15".to_string(),
            published: true,
        },
        Review {
            id: "2".to_string(),
            name: "Michael Taylor".to_string(),
            rating: 4,
            comment: "Beautiful location with amazing views. The hiking trails are well-maintained and offer various difficulty levels.".to_string(),
            date: "2025-02-28".to_string(),
            published: true,
        },
        Review {
            id: "3".to_string(),
            name: "Emma Wilson".to_string(),
            rating: 5,
            comment: "We loved our cabin stay! The amenities were perfect and the atmosphere was so relaxing. Will definitely return.".to_string(),
            date: "2025-02-10".to_string(),
            published: true,
        },
    ]
}

pub fn pricing() -> Vec<PricingOption> {
    vec![
        PricingOption {
            id: "1".to_string(),
            name: "Standard Campsite".to_string(),
            description: "Perfect for tent camping with basic amenities.".to_string(),
            price_per_night: 35.0,
            features: vec![
                "Fire pit".to_string(),
                "Picnic table".to_string(),
                "Access to communal bathrooms".to_string(),
                "Parking spot".to_string(),
            ],
        },
        PricingOption {
            id: "2".to_string(),
            name: "Premium Campsite".to_string(),
            description: "Spacious site with water and electric hookups.".to_string(),
            price_per_night: 55.0,
            features: vec![
                "Water hookup".to_string(),
                "Electric hookup".to_string(),
                "Fire pit".to_string(),
                "Picnic table".to_string(),
                "Wi-Fi".to_string(),
                "Premium location".to_string(),
            ],
        },
        PricingOption {
            id: "3".to_string(),
            name: "Rustic Cabin".to_string(),
            description: "Cozy cabin with basic amenities for a comfortable stay.".to_string(),
            price_per_night: 95.0,
            features: vec![
                "Queen bed".to_string(),
                "Small kitchenette".to_string(),
                "Private bathroom".to_string(),
                "Heating/AC".to_string(),
                "Covered porch".to_string(),
            ],
        },
        PricingOption {
            id: "4".to_string(),
            name: "Luxury Cabin".to_string(),
            description: "Fully equipped cabin with modern amenities for an upscale camping experience.".to_string(),
            price_per_night: 165.0,
            features: vec![
                "King bed".to_string(),
                "Full kitchen".to_string(),
                "Hot tub".to_string(),
                "Fireplace".to_string(),
                "Private deck".to_string(),
                "Premium views".to_string(),
            ],
        },
    ]
}

pub fn gallery() -> Vec<GalleryImage> {
    vec![
        GalleryImage {
            id: "1".to_string(),
            url: "https://images.pexels.com/photos/2422265/pexels-photo-2422265.jpeg".to_string(),
            title: "Lakeside View".to_string(),
            description: "Beautiful sunrise view from our premium campsites".to_string(),
            featured: true,
        },
        GalleryImage {
            id: "2".to_string(),
            url: "https://images.pexels.com/photos/2582818/pexels-photo-2582818.jpeg".to_string(),
            title: "Cozy Cabin".to_string(),
            description: "Interior of our rustic cabins with all amenities".to_string(),
            featured: false,
        },
        GalleryImage {
            id: "3".to_string(),
            url: "https://images.pexels.com/photos/6271625/pexels-photo-6271625.jpeg".to_string(),
            title: "Campfire Nights".to_string(),
            description: "Enjoy evenings around the campfire with friends and family".to_string(),
            featured: true,
        },
        GalleryImage {
            id: "4".to_string(),
            url: "https://images.pexels.com/photos/6271619/pexels-photo-6271619.jpeg".to_string(),
            title: "Forest Trails".to_string(),
            description: "Explore our extensive network of hiking trails".to_string(),
            featured: false,
        },
        GalleryImage {
            id: "5".to_string(),
            url: "https://images.pexels.com/photos/27865/pexels-photo-27865.jpg".to_string(),
            title: "Wildlife Encounters".to_string(),
            description: "The campsite is home to diverse wildlife".to_string(),
            featured: false,
        },
        GalleryImage {
            id: "6".to_string(),
            url: "https://images.pexels.com/photos/2258536/pexels-photo-2258536.jpeg".to_string(),
            title: "Stargazing Deck".to_string(),
            description: "Perfect spot for nighttime astronomy".to_string(),
            featured: true,
        },
    ]
}
