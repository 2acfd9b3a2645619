//! Typed errors for the marketplace library.
//!
//! Validation failures are recoverable and returned to the caller that
//! submitted the listing. Unknown ids on favorite toggling are reported as
//! `NotFound` by the fallible API only; the UI-facing path ignores them.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Creation-form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Price,
    Category,
    Condition,
    Description,
    Location,
    SellerName,
    SellerEmail,
    SellerPhone,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Price => "price",
            Field::Category => "category",
            Field::Condition => "condition",
            Field::Description => "description",
            Field::Location => "location",
            Field::SellerName => "seller_name",
            Field::SellerEmail => "seller_email",
            Field::SellerPhone => "seller_phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    Missing,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub problem: Problem,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            Problem::Missing => write!(f, "{} (missing)", self.field),
            Problem::Invalid => write!(f, "{} (invalid)", self.field),
        }
    }
}

/// One or more required listing fields were missing or invalid
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("listing rejected: {}", join_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn contains(&self, field: Field) -> bool {
        self.fields.iter().any(|e| e.field == field)
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors surfaced by the marketplace library
#[derive(Debug, Error)]
pub enum MarketError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No listing carries this id
    #[error("listing not found: {id}")]
    NotFound { id: String },

    /// Selected file cannot be used as a listing image
    #[error("unusable image {}: {reason}", .path.display())]
    Image { path: PathBuf, reason: String },
}

pub type MarketResult<T> = Result<T, MarketError>;
