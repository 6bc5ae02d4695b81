//! The "create recipe" form.
//!
//! A [`RecipeDraft`] holds whatever the user has typed so far and may be
//! invalid in every way. [`RecipeAuthoringForm::submit`] validates it, turns
//! it into an immutable [`Recipe`], hands that to the persistence layer
//! through the [`Outbox`] and resets the draft.

use std::collections::BTreeSet;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    constants::category_label,
    error::{FieldViolation, FormError, ValidationErrors},
    form::{parse_optional_number, Form},
    outbox::{CoreEvent, Outbox},
    schema::{AuthorSnapshot, DraftField, Recipe},
    session::Session,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: Option<u32>,
    pub image_url: String,
    ingredients: Vec<String>,
    categories: BTreeSet<String>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            instructions: String::new(),
            prep_time: None,
            cook_time: None,
            servings: None,
            image_url: String::new(),
            ingredients: vec![String::new()],
            categories: BTreeSet::new(),
        }
    }
}

impl RecipeDraft {
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.categories.contains(label)
    }

    fn filled_ingredients(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.trim())
            .filter(|ingredient| !ingredient.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Checks every rule and reports all failures at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut violations = vec![];

        if self.title.trim().is_empty() {
            violations.push(FieldViolation::new(
                DraftField::Title,
                "Give your recipe a title.",
            ));
        }
        if self.description.trim().is_empty() {
            violations.push(FieldViolation::new(
                DraftField::Description,
                "Describe what makes this recipe special.",
            ));
        }
        if self.instructions.trim().is_empty() {
            violations.push(FieldViolation::new(
                DraftField::Instructions,
                "Provide step-by-step instructions.",
            ));
        }
        if self.filled_ingredients().is_empty() {
            violations.push(FieldViolation::new(
                DraftField::Ingredients,
                "Please add at least one ingredient.",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(violations))
        }
    }

    fn to_recipe(&self, id: String, author: Option<AuthorSnapshot>) -> Recipe {
        let image_url = self.image_url.trim();

        Recipe {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            instructions: self.instructions.trim().to_string(),
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            ingredients: self.filled_ingredients(),
            categories: self.categories.to_owned(),
            author,
            created_at: Utc::now(),
        }
    }
}

/// Where the form stands after the last submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "violations", rename_all = "snake_case")]
pub enum AuthoringState {
    #[default]
    Editing,
    /// The last submit failed; the draft is untouched and may be corrected.
    Rejected(ValidationErrors),
}

#[derive(Debug)]
pub struct RecipeAuthoringForm {
    draft: RecipeDraft,
    state: AuthoringState,
    outbox: Outbox,
}

impl RecipeAuthoringForm {
    pub fn new(outbox: Outbox) -> Self {
        Self {
            draft: RecipeDraft::default(),
            state: AuthoringState::Editing,
            outbox,
        }
    }

    pub fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    pub fn state(&self) -> &AuthoringState {
        &self.state
    }

    pub fn violations(&self) -> &[FieldViolation] {
        match &self.state {
            AuthoringState::Editing => &[],
            AuthoringState::Rejected(errors) => errors.violations(),
        }
    }

    // Ingredient rows

    pub fn add_ingredient_row(&mut self) {
        self.draft.ingredients.push(String::new());
        log::debug!("Ingredient rows: {}", self.draft.ingredients.len());
    }

    /// Removes a row unless it is the only one left. Returns whether a row
    /// was removed.
    pub fn remove_ingredient_row(&mut self, index: usize) -> Result<bool, FormError> {
        let len = self.draft.ingredients.len();
        if len <= 1 {
            log::debug!("Keeping the last ingredient row");
            return Ok(false);
        }
        if index >= len {
            return Err(FormError::RowOutOfRange { index, len });
        }

        self.draft.ingredients.remove(index);
        Ok(true)
    }

    pub fn update_ingredient_row(&mut self, index: usize, value: &str) -> Result<(), FormError> {
        let len = self.draft.ingredients.len();
        match self.draft.ingredients.get_mut(index) {
            Some(row) => {
                *row = value.to_string();
                Ok(())
            }
            None => Err(FormError::RowOutOfRange { index, len }),
        }
    }

    // Categories

    /// Flips membership of a vocabulary category. Returns whether it is
    /// selected afterwards; labels outside the vocabulary are ignored.
    pub fn toggle_category(&mut self, label: &str) -> bool {
        let Some(label) = category_label(label) else {
            log::warn!("Ignoring unknown category {label:?}");
            return false;
        };

        if self.draft.categories.remove(label) {
            false
        } else {
            self.draft.categories.insert(label.to_string());
            true
        }
    }

    // Scalar fields

    pub fn set_title(&mut self, value: &str) {
        self.draft.title = value.to_string();
    }

    pub fn set_description(&mut self, value: &str) {
        self.draft.description = value.to_string();
    }

    pub fn set_instructions(&mut self, value: &str) {
        self.draft.instructions = value.to_string();
    }

    pub fn set_image_url(&mut self, value: &str) {
        self.draft.image_url = value.to_string();
    }

    pub fn set_prep_time(&mut self, minutes: Option<u32>) {
        self.draft.prep_time = minutes;
    }

    pub fn set_cook_time(&mut self, minutes: Option<u32>) {
        self.draft.cook_time = minutes;
    }

    pub fn set_servings(&mut self, servings: Option<u32>) {
        self.draft.servings = servings;
    }

    /// Sets a scalar field from raw input text. Numeric fields take a
    /// non-negative integer or an empty string for "unset".
    pub fn set_field(&mut self, field: DraftField, raw: &str) -> Result<(), FormError> {
        if field.is_numeric() {
            let value = parse_optional_number(field.as_str(), raw)?;
            match field {
                DraftField::PrepTime => self.set_prep_time(value),
                DraftField::CookTime => self.set_cook_time(value),
                _ => self.set_servings(value),
            }
        } else {
            match field {
                DraftField::Title => self.set_title(raw),
                DraftField::Description => self.set_description(raw),
                DraftField::Instructions => self.set_instructions(raw),
                DraftField::ImageUrl => self.set_image_url(raw),
                _ => {
                    return Err(FormError::invalid_type(
                        field.as_str(),
                        "not a single-value field",
                    ))
                }
            }
        }

        log::debug!("Updated draft field {field}");
        Ok(())
    }

    /// Applies every recognised key of a presentation payload. Nothing is
    /// changed unless the whole payload decodes.
    pub fn apply_form(&mut self, form: &Form) -> Result<(), FormError> {
        let mut draft = self.draft.to_owned();

        for key in form.keys() {
            let field: DraftField = key.parse()?;
            match field {
                DraftField::Title => draft.title = form.get_str(key)?,
                DraftField::Description => draft.description = form.get_str(key)?,
                DraftField::Instructions => draft.instructions = form.get_str(key)?,
                DraftField::ImageUrl => draft.image_url = form.get_str(key)?,
                DraftField::PrepTime => draft.prep_time = form.get_number(key)?,
                DraftField::CookTime => draft.cook_time = form.get_number(key)?,
                DraftField::Servings => draft.servings = form.get_number(key)?,
                DraftField::Ingredients => {
                    let rows = form.get_str_list(key)?;
                    draft.ingredients = if rows.is_empty() {
                        vec![String::new()]
                    } else {
                        rows
                    };
                }
                DraftField::Categories => {
                    draft.categories = form
                        .get_str_list(key)?
                        .iter()
                        .map(|value| match category_label(value) {
                            Some(label) => Ok(label.to_string()),
                            None => Err(FormError::invalid_type(key, "unknown category")),
                        })
                        .collect::<Result<_, _>>()?;
                }
            }
        }

        self.draft = draft;
        Ok(())
    }

    // Submission

    /// Validates the draft. On success the new recipe is emitted to the
    /// outbox, the draft is reset and the recipe is returned; on failure the
    /// violations are kept on the form and the draft is left as it was.
    pub fn submit(&mut self, session: &Session) -> Result<Recipe, ValidationErrors> {
        if let Err(errors) = self.draft.validate() {
            log::debug!("Rejected recipe draft: {:?}", errors.fields());
            self.state = AuthoringState::Rejected(errors.to_owned());
            return Err(errors);
        }

        let recipe = self
            .draft
            .to_recipe(Uuid::new_v4().to_string(), session.author());
        log::info!(
            "Recipe {} ({:?}) submitted with {} ingredients",
            recipe.id,
            recipe.title,
            recipe.ingredients.len()
        );

        self.outbox.emit(CoreEvent::RecipeSubmitted(recipe.to_owned()));
        self.reset();

        Ok(recipe)
    }

    pub fn reset(&mut self) {
        self.draft = RecipeDraft::default();
        self.state = AuthoringState::Editing;
    }
}
