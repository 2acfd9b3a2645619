use crate::models::{Category, UnknownVariant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label of the "every category" choice in the category selector
pub const ALL_CATEGORIES_LABEL: &str = "الكل";

/// Category selector value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | ALL_CATEGORIES_LABEL => Ok(CategoryFilter::All),
            other => other.parse().map(CategoryFilter::Only),
        }
    }
}

/// Ordering of the visible listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Newest, SortKey::PriceAsc, SortKey::PriceDesc];

    pub fn key(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "جداد اللّولين",
            SortKey::PriceAsc => "الثمن من الصغير للكبير",
            SortKey::PriceDesc => "الثمن من الكبير للصغير",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortKey {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "newest" => Ok(SortKey::Newest),
            "price-asc" | "priceAsc" | "price_asc" => Ok(SortKey::PriceAsc),
            "price-desc" | "priceDesc" | "price_desc" => Ok(SortKey::PriceDesc),
            other => Err(UnknownVariant {
                kind: "sort key",
                value: other.to_string(),
            }),
        }
    }
}

/// Current filter and sort choices.
///
/// Price bounds are kept as the raw text typed by the user; they are parsed
/// each time the view is derived and ignored when they do not hold a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Free-text search over title and description
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
    /// Minimum price as typed
    pub min_price: String,
    /// Maximum price as typed
    pub max_price: String,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_min_price(mut self, min: impl Into<String>) -> Self {
        self.min_price = min.into();
        self
    }

    pub fn with_max_price(mut self, max: impl Into<String>) -> Self {
        self.max_price = max.into();
        self
    }

    /// Effective search needle, `None` when the search stage is inactive
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    pub fn min_bound(&self) -> Option<f64> {
        parse_price_bound(&self.min_price)
    }

    pub fn max_bound(&self) -> Option<f64> {
        parse_price_bound(&self.max_price)
    }

    /// Empty both price bounds
    pub fn clear_price(&mut self) {
        self.min_price.clear();
        self.max_price.clear();
    }

    /// Back to default search, category and sort. Price bounds are kept.
    pub fn reset(&mut self) {
        self.search.clear();
        self.category = CategoryFilter::All;
        self.sort = SortKey::Newest;
    }
}

/// Parse a price bound leniently: blank, malformed or non-finite input means
/// "no bound".
pub fn parse_price_bound(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
