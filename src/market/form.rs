use crate::error::{Field, ValidationError};
use crate::market::store::{ListingDraft, ListingStore};
use crate::market::traits::{Clock, ImageReader};
use crate::models::Listing;
use std::path::Path;
use tracing::{info, warn};

/// State of the "new listing" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingForm {
    draft: ListingDraft,
}

impl ListingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            Field::Title => &mut self.draft.title,
            Field::Price => &mut self.draft.price,
            Field::Category => &mut self.draft.category,
            Field::Condition => &mut self.draft.condition,
            Field::Description => &mut self.draft.description,
            Field::Location => &mut self.draft.location,
            Field::SellerName => &mut self.draft.seller_name,
            Field::SellerEmail => &mut self.draft.seller_email,
            Field::SellerPhone => &mut self.draft.seller_phone,
        };
        *slot = value;
    }

    pub fn image(&self) -> Option<&str> {
        self.draft.image.as_deref()
    }

    pub fn has_image(&self) -> bool {
        self.draft.image.is_some()
    }

    /// Store an already-read image reference
    pub fn set_image(&mut self, data_url: String) {
        self.draft.image = Some(data_url);
    }

    /// Read `path` once and use it as the listing image.
    ///
    /// Until the read completes the previous image stays in place; a failed
    /// read leaves it unchanged and returns `false`.
    pub async fn attach_image<R: ImageReader + ?Sized>(&mut self, reader: &R, path: &Path) -> bool {
        match reader.read_data_url(path).await {
            Ok(url) => {
                info!("Attached image {} via {} reader", path.display(), reader.reader_name());
                self.set_image(url);
                true
            }
            Err(err) => {
                warn!("Image read failed for {}: {:#}", path.display(), err);
                false
            }
        }
    }

    /// Hand the draft to the store. The form is cleared on success and kept
    /// as-is on failure so the user can correct it.
    pub fn submit<'s, C: Clock>(
        &mut self,
        store: &'s mut ListingStore<C>,
    ) -> Result<&'s Listing, ValidationError> {
        let listing = store.add(self.draft.clone())?;
        self.draft = ListingDraft::default();
        Ok(listing)
    }
}
