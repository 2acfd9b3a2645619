use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returned when a category or condition string is not part of the fixed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Listing category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    Furniture,
    HomeTools,
    KidsBaby,
    Fashion,
    SportsLeisure,
    Vehicles,
    BooksMedia,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Electronics,
        Category::Furniture,
        Category::HomeTools,
        Category::KidsBaby,
        Category::Fashion,
        Category::SportsLeisure,
        Category::Vehicles,
        Category::BooksMedia,
        Category::Other,
    ];

    /// Machine key used in serialized data and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Furniture => "furniture",
            Category::HomeTools => "home_tools",
            Category::KidsBaby => "kids_baby",
            Category::Fashion => "fashion",
            Category::SportsLeisure => "sports_leisure",
            Category::Vehicles => "vehicles",
            Category::BooksMedia => "books_media",
            Category::Other => "other",
        }
    }

    /// Display label shown to buyers
    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "إلكترونيك",
            Category::Furniture => "موبيليا",
            Category::HomeTools => "أدوات الدار",
            Category::KidsBaby => "دراري و بيبي",
            Category::Fashion => "لباس و الموضة",
            Category::SportsLeisure => "رياضة و ترفيه",
            Category::Vehicles => "طوموبيل/موتور/بيّيسات",
            Category::BooksMedia => "كتوب و ميديا",
            Category::Other => "حوايج خرين",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s || c.label() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// Physical condition of the item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    LikeNew,
    VeryGood,
    Good,
    Acceptable,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::LikeNew,
        Condition::VeryGood,
        Condition::Good,
        Condition::Acceptable,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Condition::LikeNew => "like_new",
            Condition::VeryGood => "very_good",
            Condition::Good => "good",
            Condition::Acceptable => "acceptable",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Condition::LikeNew => "كيف الجديدة",
            Condition::VeryGood => "مزيان بزاف",
            Condition::Good => "مزيان",
            Condition::Acceptable => "مقبول",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Condition::ALL
            .into_iter()
            .find(|c| c.key() == s || c.label() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "condition",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_key_and_label() {
        assert_eq!("electronics".parse::<Category>(), Ok(Category::Electronics));
        assert_eq!("موبيليا".parse::<Category>(), Ok(Category::Furniture));
        assert_eq!(" other ".parse::<Category>(), Ok(Category::Other));
    }

    #[test]
    fn test_category_rejects_unknown() {
        let err = "gadgets".parse::<Category>().unwrap_err();
        assert_eq!(err.kind, "category");
        assert_eq!(err.value, "gadgets");
    }

    #[test]
    fn test_condition_labels_are_distinct() {
        // "مزيان" is a prefix of "مزيان بزاف"; lookup must be exact
        assert_eq!("مزيان".parse::<Condition>(), Ok(Condition::Good));
        assert_eq!("مزيان بزاف".parse::<Condition>(), Ok(Condition::VeryGood));
    }

    #[test]
    fn test_serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&Category::SportsLeisure).unwrap();
        assert_eq!(json, "\"sports_leisure\"");
        let back: Condition = serde_json::from_str("\"like_new\"").unwrap();
        assert_eq!(back, Condition::LikeNew);
    }
}
