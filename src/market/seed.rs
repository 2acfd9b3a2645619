use crate::market::placeholder::placeholder_image;
use crate::models::{Category, Condition, Listing, Seller};
use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

/// Demo listings shown when the marketplace starts, dated relative to `now`
pub fn demo_listings(now: DateTime<Utc>) -> Vec<Listing> {
    info!("📋 Loading demo listings");

    vec![
        Listing {
            id: Uuid::new_v4().to_string(),
            title: "iPhone 12 128GB".to_string(),
            description: "حالة مزيانة، خدشة خفيفة فلكادر. الشارجور كاين.".to_string(),
            price: 3200.0,
            category: Category::Electronics,
            condition: Condition::Good,
            location: "باد رايخنهال".to_string(),
            images: vec![placeholder_image("iPhone 12 128GB")],
            created_at: now - Duration::hours(26),
            seller: Seller {
                name: "حمزة".to_string(),
                email: Some("hamza@example.com".to_string()),
                phone: Some("+49 1523 7740577".to_string()),
            },
            favorite: false,
        },
        Listing {
            id: Uuid::new_v4().to_string(),
            title: "طيبلة خدمة 120×60".to_string(),
            description: "لون فاتح، مستعملة شوية برّك. التسليم فزالسبورغ.".to_string(),
            price: 600.0,
            category: Category::Furniture,
            condition: Condition::VeryGood,
            location: "زالسبورغ".to_string(),
            images: vec![placeholder_image("طيبلة خدمة 120×60")],
            created_at: now - Duration::hours(8),
            seller: Seller {
                name: "سارة".to_string(),
                email: Some("sara@example.com".to_string()),
                phone: None,
            },
            favorite: false,
        },
        Listing {
            id: Uuid::new_v4().to_string(),
            title: "بيكالة دراري 20\"".to_string(),
            description: "ألمنيوم خفيف، لا كتصلح ل 6–8 سنين.".to_string(),
            price: 850.0,
            category: Category::SportsLeisure,
            condition: Condition::Good,
            location: "لينتس".to_string(),
            images: vec![placeholder_image("بيكالة 20\"")],
            created_at: now - Duration::hours(80),
            seller: Seller {
                name: "يونس".to_string(),
                email: None,
                phone: None,
            },
            favorite: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::query::view;
    use crate::market::types::{QueryParams, SortKey};

    #[test]
    fn test_demo_listings_are_well_formed() {
        let now = Utc::now();
        let listings = demo_listings(now);

        assert_eq!(listings.len(), 3);
        assert!(listings.iter().all(|l| !l.images.is_empty()));
        assert!(listings.iter().all(|l| l.created_at < now));
        assert!(listings.iter().all(|l| !l.favorite));
    }

    #[test]
    fn test_demo_price_range_example() {
        let listings = demo_listings(Utc::now());
        let params = QueryParams::new().with_min_price("700").with_max_price("3000");
        let out = view(&listings, &params);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].price, 850.0);
    }

    #[test]
    fn test_demo_price_desc_example() {
        let listings = demo_listings(Utc::now());
        let params = QueryParams::new().with_sort(SortKey::PriceDesc);
        let prices: Vec<f64> = view(&listings, &params).iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![3200.0, 850.0, 600.0]);
    }
}
