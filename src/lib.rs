//! In-memory classified-ads marketplace: a listing store, a query engine that
//! derives the filtered and sorted view, and the supporting pieces a front end
//! needs (creation form, placeholder images, price formatting).

pub mod config;
pub mod error;
pub mod format;
pub mod market;
pub mod models;

pub use error::{Field, MarketError, ValidationError};
pub use models::{Category, Condition, Listing, Seller};
