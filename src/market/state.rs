//! Owned application state and the pure update function driving it.
//!
//! Every user interaction is an [`Action`]; [`update`] takes the current
//! state by value and returns the next one. Rendering is left to whoever
//! holds the state.

use crate::error::{Field, ValidationError};
use crate::market::form::ListingForm;
use crate::market::query::view;
use crate::market::store::ListingStore;
use crate::market::traits::{Clock, ImageReader, SystemClock};
use crate::market::types::{CategoryFilter, QueryParams, SortKey};
use crate::models::Listing;
use std::path::Path;
use tracing::debug;

/// A discrete user interaction
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetSearch(String),
    SetCategory(CategoryFilter),
    SetSort(SortKey),
    SetMinPrice(String),
    SetMaxPrice(String),
    /// Empty both price bounds
    ClearPrice,
    /// Reset search, category and sort
    ResetFilters,
    ToggleFavorite(String),
    OpenForm,
    CloseForm,
    SetFormField(Field, String),
    /// An image read finished for the open form
    ImageLoaded(String),
    SubmitForm,
}

#[derive(Debug, Clone)]
pub struct AppState<C: Clock = SystemClock> {
    pub store: ListingStore<C>,
    pub query: QueryParams,
    /// Open creation form, if any
    pub form: Option<ListingForm>,
    /// Outcome of the last rejected submission, for display
    pub last_error: Option<ValidationError>,
}

impl<C: Clock> AppState<C> {
    pub fn new(store: ListingStore<C>) -> Self {
        Self {
            store,
            query: QueryParams::default(),
            form: None,
            last_error: None,
        }
    }

    /// Listings to display for the current query
    pub fn visible(&self) -> Vec<&Listing> {
        view(self.store.listings(), &self.query)
    }

    /// Read an image for the open form. Without an open form nothing is read.
    pub async fn attach_image<R: ImageReader + ?Sized>(mut self, reader: &R, path: &Path) -> Self {
        if let Some(form) = self.form.as_mut() {
            form.attach_image(reader, path).await;
        }
        self
    }
}

/// Apply one action and return the next state
pub fn update<C: Clock>(mut state: AppState<C>, action: Action) -> AppState<C> {
    debug!("Applying {:?}", action);

    match action {
        Action::SetSearch(text) => state.query.search = text,
        Action::SetCategory(category) => state.query.category = category,
        Action::SetSort(sort) => state.query.sort = sort,
        Action::SetMinPrice(raw) => state.query.min_price = raw,
        Action::SetMaxPrice(raw) => state.query.max_price = raw,
        Action::ClearPrice => state.query.clear_price(),
        Action::ResetFilters => state.query.reset(),
        Action::ToggleFavorite(id) => {
            state.store.toggle_favorite(&id);
        }
        Action::OpenForm => {
            state.form.get_or_insert_with(ListingForm::new);
        }
        Action::CloseForm => {
            state.form = None;
            state.last_error = None;
        }
        Action::SetFormField(field, value) => {
            if let Some(form) = state.form.as_mut() {
                form.set(field, value);
            }
        }
        Action::ImageLoaded(url) => {
            if let Some(form) = state.form.as_mut() {
                form.set_image(url);
            }
        }
        Action::SubmitForm => {
            if let Some(mut form) = state.form.take() {
                match form.submit(&mut state.store) {
                    Ok(_) => state.last_error = None,
                    Err(err) => {
                        state.last_error = Some(err);
                        state.form = Some(form);
                    }
                }
            }
        }
    }

    state
}
