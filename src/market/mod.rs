pub mod form;
pub mod image;
pub mod placeholder;
pub mod query;
pub mod seed;
pub mod state;
pub mod store;
pub mod traits;
pub mod types;

pub use form::ListingForm;
pub use image::FileImageReader;
pub use placeholder::placeholder_image;
pub use query::view;
pub use state::{update, Action, AppState};
pub use store::{ListingDraft, ListingStore};
pub use traits::{Clock, ImageReader, SystemClock};
pub use types::{CategoryFilter, QueryParams, SortKey};
