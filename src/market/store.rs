use crate::error::{Field, FieldError, MarketError, MarketResult, Problem, ValidationError};
use crate::market::placeholder::placeholder_image;
use crate::market::traits::{Clock, SystemClock};
use crate::models::{Category, Condition, Listing, Seller};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Unvalidated listing input, as typed into the creation form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub condition: String,
    pub location: String,
    /// Image chosen by the seller, if any
    pub image: Option<String>,
    pub seller_name: String,
    pub seller_email: String,
    pub seller_phone: String,
}

/// Draft that passed validation, ready to become a listing
#[derive(Debug, Clone, PartialEq)]
struct ValidDraft {
    title: String,
    description: String,
    price: f64,
    category: Category,
    condition: Condition,
    location: String,
    image: Option<String>,
    seller: Seller,
}

impl ListingDraft {
    /// Check the required fields, reporting every failing one at once
    fn validate(self) -> Result<ValidDraft, ValidationError> {
        let mut fields = Vec::new();
        let mut reject = |field, problem| fields.push(FieldError { field, problem });

        if self.title.trim().is_empty() {
            reject(Field::Title, Problem::Missing);
        }

        let price = match self.price.trim() {
            "" => {
                reject(Field::Price, Problem::Missing);
                None
            }
            raw => match raw.parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
                _ => {
                    reject(Field::Price, Problem::Invalid);
                    None
                }
            },
        };

        let category = if self.category.trim().is_empty() {
            reject(Field::Category, Problem::Missing);
            None
        } else {
            self.category
                .parse::<Category>()
                .map_err(|_| reject(Field::Category, Problem::Invalid))
                .ok()
        };

        let condition = if self.condition.trim().is_empty() {
            reject(Field::Condition, Problem::Missing);
            None
        } else {
            self.condition
                .parse::<Condition>()
                .map_err(|_| reject(Field::Condition, Problem::Invalid))
                .ok()
        };

        match (price, category, condition) {
            (Some(price), Some(category), Some(condition)) if fields.is_empty() => Ok(ValidDraft {
                title: self.title.trim().to_string(),
                description: self.description,
                price,
                category,
                condition,
                location: self.location,
                image: self.image.filter(|i| !i.is_empty()),
                seller: Seller {
                    name: self.seller_name,
                    email: non_empty(self.seller_email),
                    phone: non_empty(self.seller_phone),
                },
            }),
            _ => Err(ValidationError { fields }),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Authoritative collection of listings for the running session.
///
/// New listings go to the front. Creation timestamps never go backwards even
/// if the clock does.
#[derive(Debug, Clone)]
pub struct ListingStore<C: Clock = SystemClock> {
    listings: Vec<Listing>,
    clock: C,
    last_created: Option<DateTime<Utc>>,
}

impl ListingStore<SystemClock> {
    /// Create an empty store using the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ListingStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ListingStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            listings: Vec::new(),
            clock,
            last_created: None,
        }
    }

    /// Start from existing listings, kept in the given order
    pub fn with_listings(mut self, listings: Vec<Listing>) -> Self {
        self.last_created = listings.iter().map(|l| l.created_at).max();
        self.listings = listings;
        self
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Validate a draft and insert it at the head of the collection.
    ///
    /// On failure the collection is left untouched.
    pub fn add(&mut self, draft: ListingDraft) -> Result<&Listing, ValidationError> {
        let valid = match draft.validate() {
            Ok(valid) => valid,
            Err(err) => {
                warn!("Rejected listing: {}", err);
                return Err(err);
            }
        };

        let listing = Listing {
            id: self.fresh_id(),
            images: vec![valid
                .image
                .unwrap_or_else(|| placeholder_image(&valid.title))],
            title: valid.title,
            description: valid.description,
            price: valid.price,
            category: valid.category,
            condition: valid.condition,
            location: valid.location,
            created_at: self.next_timestamp(),
            seller: valid.seller,
            favorite: false,
        };

        info!(
            "Added listing {} \"{}\" ({} MAD)",
            listing.id, listing.title, listing.price
        );
        self.listings.insert(0, listing);
        Ok(&self.listings[0])
    }

    /// Flip the favorite flag of one listing and return the collection.
    ///
    /// An unknown id is a stale reference and is ignored.
    pub fn toggle_favorite(&mut self, id: &str) -> &[Listing] {
        if let Err(err) = self.try_toggle_favorite(id) {
            debug!("Ignoring favorite toggle: {}", err);
        }
        &self.listings
    }

    /// Flip the favorite flag of one listing, returning the new flag
    pub fn try_toggle_favorite(&mut self, id: &str) -> MarketResult<bool> {
        let listing = self
            .listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| MarketError::NotFound { id: id.to_string() })?;

        listing.favorite = !listing.favorite;
        debug!("Listing {} favorite = {}", listing.id, listing.favorite);
        Ok(listing.favorite)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = self.clock.now();
        let stamp = match self.last_created {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_created = Some(stamp);
        stamp
    }
}
