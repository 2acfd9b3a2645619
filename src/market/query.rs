use crate::market::types::{CategoryFilter, QueryParams, SortKey};
use crate::models::Listing;

/// Derive the ordered sequence of listings to display.
///
/// Active predicates (search text, category, minimum and maximum price) are
/// combined with AND. The sort is stable, so listings with equal keys keep the
/// order they have in `listings`. The input is never modified.
pub fn view<'a>(listings: &'a [Listing], params: &QueryParams) -> Vec<&'a Listing> {
    let filter = Filter::from_params(params);

    let mut visible: Vec<&Listing> = listings.iter().filter(|l| filter.admits(l)).collect();

    match params.sort {
        SortKey::Newest => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::PriceAsc => visible.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => visible.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    visible
}

/// Predicates resolved once per view
struct Filter {
    needle: Option<String>,
    category: CategoryFilter,
    min: Option<f64>,
    max: Option<f64>,
}

impl Filter {
    fn from_params(params: &QueryParams) -> Self {
        Self {
            needle: params.search_needle(),
            category: params.category,
            min: params.min_bound(),
            max: params.max_bound(),
        }
    }

    fn admits(&self, listing: &Listing) -> bool {
        if let Some(needle) = &self.needle {
            let hit = listing.title.to_lowercase().contains(needle.as_str())
                || listing.description.to_lowercase().contains(needle.as_str());
            if !hit {
                return false;
            }
        }
        if !self.category.admits(listing.category) {
            return false;
        }
        if self.min.is_some_and(|min| listing.price < min) {
            return false;
        }
        if self.max.is_some_and(|max| listing.price > max) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Condition, Seller};
    use chrono::{Duration, TimeZone, Utc};

    fn listing(id: &str, title: &str, price: f64, category: Category, age_hours: i64) -> Listing {
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Listing {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            price,
            category,
            condition: Condition::Good,
            location: "Rabat".to_string(),
            images: vec!["img".to_string()],
            created_at: base - Duration::hours(age_hours),
            seller: Seller::default(),
            favorite: false,
        }
    }

    fn sample() -> Vec<Listing> {
        vec![
            listing("phone", "iPhone 12 128GB", 3200.0, Category::Electronics, 26),
            listing("desk", "Desk 120x60", 600.0, Category::Furniture, 8),
            listing("bike", "Kids bike 20\"", 850.0, Category::SportsLeisure, 80),
        ]
    }

    fn ids(view: &[&Listing]) -> Vec<String> {
        view.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn test_default_view_is_newest_first() {
        let items = sample();
        let out = view(&items, &QueryParams::default());
        assert_eq!(ids(&out), vec!["desk", "phone", "bike"]);
    }

    #[test]
    fn test_price_range_filters_both_bounds() {
        let items = sample();
        for sort in SortKey::ALL {
            let params = QueryParams::new()
                .with_min_price("700")
                .with_max_price("3000")
                .with_sort(sort);
            let out = view(&items, &params);
            assert_eq!(ids(&out), vec!["bike"]);
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let items = sample();
        let params = QueryParams::new().with_min_price("600").with_max_price("850");
        let out = view(&items, &params);
        assert_eq!(ids(&out), vec!["desk", "bike"]);
    }

    #[test]
    fn test_malformed_bounds_are_ignored() {
        let items = sample();
        let params = QueryParams::new().with_min_price("abc").with_max_price("12,5x");
        assert_eq!(view(&items, &params).len(), 3);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let items = sample();
        let params = QueryParams::new().with_search(" iPhone ");
        assert_eq!(ids(&view(&items, &params)), vec!["phone"]);

        let params = QueryParams::new().with_search("IPHONE");
        assert_eq!(ids(&view(&items, &params)), vec!["phone"]);
    }

    #[test]
    fn test_search_matches_description() {
        let mut items = sample();
        items[1].description = "Light wood, barely used".to_string();
        let params = QueryParams::new().with_search("WOOD");
        assert_eq!(ids(&view(&items, &params)), vec!["desk"]);
    }

    #[test]
    fn test_search_handles_arabic_text() {
        let mut items = sample();
        items[1].title = "طيبلة خدمة 120×60".to_string();
        let params = QueryParams::new().with_search("طيبلة");
        assert_eq!(ids(&view(&items, &params)), vec!["desk"]);
    }

    #[test]
    fn test_category_filter() {
        let items = sample();
        let params =
            QueryParams::new().with_category(CategoryFilter::Only(Category::Furniture));
        assert_eq!(ids(&view(&items, &params)), vec!["desk"]);

        let params = QueryParams::new().with_category(CategoryFilter::Only(Category::Vehicles));
        assert!(view(&items, &params).is_empty());
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let items = sample();
        let params = QueryParams::new()
            .with_search("i")
            .with_category(CategoryFilter::Only(Category::Electronics))
            .with_max_price("1000");
        assert!(view(&items, &params).is_empty());
    }

    #[test]
    fn test_price_desc_order() {
        let items = sample();
        let params = QueryParams::new().with_sort(SortKey::PriceDesc);
        let prices: Vec<f64> = view(&items, &params).iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![3200.0, 850.0, 600.0]);
    }

    #[test]
    fn test_price_asc_order() {
        let items = sample();
        let params = QueryParams::new().with_sort(SortKey::PriceAsc);
        let prices: Vec<f64> = view(&items, &params).iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![600.0, 850.0, 3200.0]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let items = vec![
            listing("a", "A", 100.0, Category::Other, 1),
            listing("b", "B", 50.0, Category::Other, 1),
            listing("c", "C", 100.0, Category::Other, 1),
            listing("d", "D", 50.0, Category::Other, 1),
        ];

        let asc = view(&items, &QueryParams::new().with_sort(SortKey::PriceAsc));
        assert_eq!(ids(&asc), vec!["b", "d", "a", "c"]);

        let desc = view(&items, &QueryParams::new().with_sort(SortKey::PriceDesc));
        assert_eq!(ids(&desc), vec!["a", "c", "b", "d"]);

        // identical timestamps keep input order
        let newest = view(&items, &QueryParams::default());
        assert_eq!(ids(&newest), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_view_does_not_touch_input() {
        let items = sample();
        let before = items.clone();
        let _ = view(&items, &QueryParams::new().with_sort(SortKey::PriceAsc));
        assert_eq!(items, before);
    }

    #[test]
    fn test_view_is_exactly_the_matching_subset() {
        let mut items = sample();
        items[0].description = "Screen has a light scratch".to_string();
        items[1].description = "Light wood, pickup only".to_string();
        items.push(listing("lamp", "Desk lamp", 120.0, Category::HomeTools, 3));
        items.push(listing("tv", "Samsung TV 43", 1500.0, Category::Electronics, 40));

        // (search, category, min, max, sort)
        let cases: [(&str, Option<Category>, Option<f64>, Option<f64>, SortKey); 6] = [
            ("light", None, None, None, SortKey::Newest),
            ("desk", None, None, Some(500.0), SortKey::PriceAsc),
            ("", Some(Category::Electronics), None, None, SortKey::PriceDesc),
            ("", None, Some(800.0), None, SortKey::PriceAsc),
            ("e", None, Some(120.0), Some(1500.0), SortKey::Newest),
            ("zzz", None, None, None, SortKey::Newest),
        ];

        for (search, category, min, max, sort) in cases {
            let mut params = QueryParams::new().with_search(search).with_sort(sort);
            if let Some(c) = category {
                params = params.with_category(CategoryFilter::Only(c));
            }
            if let Some(m) = min {
                params = params.with_min_price(m.to_string());
            }
            if let Some(m) = max {
                params = params.with_max_price(m.to_string());
            }

            let mut expected: Vec<&str> = items
                .iter()
                .filter(|l| {
                    let needle = search.to_lowercase();
                    (needle.is_empty()
                        || l.title.to_lowercase().contains(&needle)
                        || l.description.to_lowercase().contains(&needle))
                        && category.map_or(true, |c| l.category == c)
                        && min.map_or(true, |m| l.price >= m)
                        && max.map_or(true, |m| l.price <= m)
                })
                .map(|l| l.id.as_str())
                .collect();

            let out = view(&items, &params);
            let mut got: Vec<&str> = out.iter().map(|l| l.id.as_str()).collect();

            for pair in out.windows(2) {
                let ordered = match sort {
                    SortKey::Newest => pair[0].created_at >= pair[1].created_at,
                    SortKey::PriceAsc => pair[0].price <= pair[1].price,
                    SortKey::PriceDesc => pair[0].price >= pair[1].price,
                };
                assert!(ordered, "{:?} out of order for {:?}", sort, search);
            }

            got.sort();
            expected.sort();
            assert_eq!(got, expected, "search {:?}", search);
        }
    }

    #[test]
    fn test_matching_subset_examples() {
        let items = sample();
        let params = QueryParams::new().with_search("k").with_max_price("850");
        assert_eq!(ids(&view(&items, &params)), vec!["desk", "bike"]);
    }
}
