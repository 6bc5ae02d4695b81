pub const RECIPE_COUNT_PER_PAGE: usize = 12;

/// Facet value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

pub const RECIPE_CATEGORIES: &[(&str, &str)] = &[
    ("breakfast", "Breakfast"),
    ("lunch", "Lunch"),
    ("dinner", "Dinner"),
    ("dessert", "Dessert"),
    ("appetizer", "Appetizer"),
    ("snack", "Snack"),
    ("vegetarian", "Vegetarian"),
    ("vegan", "Vegan"),
    ("gluten_free", "Gluten-Free"),
    ("quick_and_easy", "Quick & Easy"),
    ("italian", "Italian"),
    ("asian", "Asian"),
    ("mexican", "Mexican"),
];

/// Resolves a slug or a label to the canonical category label.
pub fn category_label(value: &str) -> Option<&'static str> {
    RECIPE_CATEGORIES
        .iter()
        .find(|(slug, label)| *slug == value || *label == value)
        .map(|(_, label)| *label)
}

/// Position of a label in the vocabulary, used for display ordering.
pub fn category_position(label: &str) -> Option<usize> {
    RECIPE_CATEGORIES.iter().position(|(_, l)| *l == label)
}

/// Labels offered by the catalog facet bar, "All" first.
pub fn category_facets() -> Vec<&'static str> {
    std::iter::once(ALL_CATEGORIES)
        .chain(RECIPE_CATEGORIES.iter().map(|(_, label)| *label))
        .collect()
}
