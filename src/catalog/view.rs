use serde::Serialize;

use crate::{
    cache::{CacheBind, ViewCache},
    constants::{category_label, RECIPE_COUNT_PER_PAGE},
    pagination::PageContext,
    schema::Recipe,
    search::{CategoryFilter, SearchFilter},
};

/// What the presentation layer renders for the browse page.
#[derive(Debug, Serialize)]
pub struct CatalogView<'a> {
    pub recipes: Vec<&'a Recipe>,
    pub query: &'a str,
    pub category: &'a str,
    pub is_empty: bool,
}

/// A recipe collection together with the active query and category facet.
///
/// Every mutation re-derives the filtered view before returning, so
/// [`RecipeCatalog::view`] always equals
/// [`filter_recipes`](crate::search::filter_recipes) over the same inputs.
#[derive(Debug, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    filter: SearchFilter,
    generation: u64,
    cache: ViewCache,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut catalog = Self {
            recipes,
            ..Self::default()
        };
        catalog.refresh();
        catalog
    }

    fn refresh(&mut self) {
        let bind = CacheBind::new(self.generation, &self.filter);
        self.cache.refresh(bind, &self.recipes);
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.refresh();
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter = SearchFilter::with_category(query, self.filter.category().to_owned());
        self.refresh();
    }

    pub fn set_category(&mut self, category: &str) {
        self.filter = SearchFilter::new(self.filter.query(), category);
        self.refresh();
    }

    /// Selects a facet by vocabulary slug, e.g. from a route segment.
    /// Returns false, leaving the facet as it was, for an unknown slug.
    pub fn set_category_slug(&mut self, slug: &str) -> bool {
        match category_label(slug) {
            Some(label) => {
                self.set_category(label);
                true
            }
            None => {
                log::warn!("Ignoring unknown category slug {slug:?}");
                false
            }
        }
    }

    /// Appends a recipe, e.g. one just accepted by the authoring form.
    pub fn insert(&mut self, recipe: Recipe) {
        log::debug!("Adding recipe {} to catalog", recipe.id);
        self.recipes.push(recipe);
        self.bump_generation();
    }

    pub fn replace_all(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
        self.bump_generation();
    }

    pub fn query(&self) -> &str {
        self.filter.query()
    }

    pub fn category(&self) -> &CategoryFilter {
        self.filter.category()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn visible(&self) -> Vec<&Recipe> {
        self.cache
            .positions()
            .iter()
            .filter_map(|&i| self.recipes.get(i))
            .collect()
    }

    pub fn view(&self) -> CatalogView<'_> {
        let recipes = self.visible();
        CatalogView {
            is_empty: recipes.is_empty(),
            recipes,
            query: self.filter.query(),
            category: self.filter.category().as_str(),
        }
    }

    pub fn page(&self, offset: usize) -> PageContext<&Recipe> {
        PageContext::from_view(self.visible(), RECIPE_COUNT_PER_PAGE, offset)
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Recipes shown on a user's profile, unaffected by the active filter.
    pub fn by_author(&self, username: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.is_authored_by(username))
            .collect()
    }
}
