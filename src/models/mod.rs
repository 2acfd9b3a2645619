use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod catalog;

pub use catalog::{Category, Condition, UnknownVariant};

/// Contact details of the person selling an item
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Seller {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Amount in the marketplace currency (MAD)
    pub price: f64,
    pub category: Category,
    pub condition: Condition,
    pub location: String,
    /// Never empty; first entry is the card image
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub seller: Seller,
    #[serde(default)]
    pub favorite: bool,
}

impl Listing {
    /// Image shown on the listing card
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
