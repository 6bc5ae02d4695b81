//! Text and category filtering over a recipe collection.

use serde::Serialize;

use crate::{constants::ALL_CATEGORIES, schema::Recipe};

/// The single-select category facet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// "All" disables the facet; any other value is matched literally.
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(label) => label,
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => recipe.has_category(label),
        }
    }
}

/// Query and facet combined; a recipe must pass both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchFilter {
    query: String,
    needle: String,
    category: CategoryFilter,
}

impl SearchFilter {
    pub fn new(query: &str, category: &str) -> Self {
        Self::with_category(query, CategoryFilter::parse(category))
    }

    pub fn with_category(query: &str, category: CategoryFilter) -> Self {
        Self {
            query: query.to_string(),
            needle: query.to_lowercase(),
            category,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn matches_text(&self, recipe: &Recipe) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        recipe.title.to_lowercase().contains(&self.needle)
            || recipe.description.to_lowercase().contains(&self.needle)
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_text(recipe) && self.category.matches(recipe)
    }

    /// Positions of the matching recipes, in collection order.
    pub fn positions(&self, recipes: &[Recipe]) -> Vec<usize> {
        recipes
            .iter()
            .enumerate()
            .filter(|(_, recipe)| self.matches(recipe))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|recipe| self.matches(recipe)).collect()
    }
}

/// Stable filter of `recipes` by a case-insensitive `query` over title and
/// description and by a `category` facet ("All" passes everything).
pub fn filter_recipes<'a>(recipes: &'a [Recipe], query: &str, category: &str) -> Vec<&'a Recipe> {
    SearchFilter::new(query, category).apply(recipes)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::Utc;
    use rstest::{fixture, rstest};

    use super::*;

    fn recipe(id: &str, title: &str, description: &str, categories: &[&str]) -> Recipe {
        Recipe {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            instructions: "Cook it.".into(),
            image_url: None,
            prep_time: None,
            cook_time: None,
            servings: None,
            ingredients: vec!["something".into()],
            categories: categories.iter().map(|c| c.to_string()).collect::<BTreeSet<_>>(),
            author: None,
            created_at: Utc::now(),
        }
    }

    #[fixture]
    fn collection() -> Vec<Recipe> {
        vec![
            recipe(
                "1",
                "Creamy Tomato Basil Pasta",
                "A rich and creamy pasta dish with fresh basil.",
                &["Dinner", "Italian"],
            ),
            recipe(
                "2",
                "Decadent Chocolate Cake",
                "Moist chocolate cake with rich frosting and fresh berries.",
                &["Dessert", "Chocolate"],
            ),
            recipe(
                "3",
                "Healthy Breakfast Bowl",
                "Start your day right with fresh fruits and granola.",
                &["Breakfast", "Healthy"],
            ),
        ]
    }

    fn ids(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.id.to_owned()).collect()
    }

    #[rstest]
    #[case("pasta", "All", &["1"])]
    #[case("PASTA", "All", &["1"])]
    #[case("", "Dessert", &["2"])]
    #[case("dessert", "All", &[])]
    #[case("zzz", "All", &[])]
    #[case("fresh", "All", &["1", "2", "3"])]
    #[case("fresh", "Breakfast", &["3"])]
    #[case("rich", "Dessert", &["2"])]
    #[case("", "Healthy", &["3"])]
    #[case("", "breakfast", &[])]
    #[case("", "Vegan", &[])]
    fn filters_by_text_and_category(
        collection: Vec<Recipe>,
        #[case] query: &str,
        #[case] category: &str,
        #[case] expected: &[&str],
    ) {
        let result = filter_recipes(&collection, query, category);
        assert_eq!(ids(&result), expected);
    }

    #[rstest]
    fn no_filter_is_identity(collection: Vec<Recipe>) {
        let result = filter_recipes(&collection, "", ALL_CATEGORIES);
        assert_eq!(result.len(), collection.len());
        assert!(result.iter().zip(collection.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn empty_collection_gives_empty_result() {
        assert!(filter_recipes(&[], "pasta", "Dinner").is_empty());
    }

    #[rstest]
    fn results_are_ordered_subsequences(collection: Vec<Recipe>) {
        for query in ["", "a", "c", "fresh", "cake", "q"] {
            for category in ["All", "Dinner", "Dessert", "Healthy", "Lunch"] {
                let positions = SearchFilter::new(query, category).positions(&collection);
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn category_filter_is_literal() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("quick_and_easy"),
            CategoryFilter::Only("quick_and_easy".into())
        );
        assert_eq!(
            CategoryFilter::parse("Chocolate").as_str(),
            "Chocolate"
        );
    }

    #[test]
    fn category_membership_is_case_sensitive() {
        let recipes = vec![
            recipe("1", "Sorbet", "Cold and sweet.", &["dessert"]),
            recipe("2", "Stew", "Slow and hearty.", &["Dinner"]),
        ];

        assert_eq!(ids(&filter_recipes(&recipes, "", "dessert")), vec!["1"]);
        assert!(filter_recipes(&recipes, "", "Dessert").is_empty());
        assert!(filter_recipes(&recipes, "", "dinner").is_empty());
        assert_eq!(ids(&filter_recipes(&recipes, "", "Dinner")), vec!["2"]);
    }

    #[test]
    fn whitespace_query_is_not_trimmed() {
        let recipes = vec![recipe("1", "Pasta", "Plain", &[])];
        assert!(filter_recipes(&recipes, " ", "All").is_empty());
    }
}
