use std::{
    collections::BTreeSet,
    fmt::{self, Display},
    str::FromStr,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::category_position;

use super::error::FormError;

pub type RecipeId = String;
pub type UserId = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Title,
    Description,
    Instructions,
    PrepTime,
    CookTime,
    Servings,
    ImageUrl,
    Ingredients,
    Categories,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Instructions => "instructions",
            Self::PrepTime => "prep_time",
            Self::CookTime => "cook_time",
            Self::Servings => "servings",
            Self::ImageUrl => "image_url",
            Self::Ingredients => "ingredients",
            Self::Categories => "categories",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::PrepTime | Self::CookTime | Self::Servings)
    }
}

impl Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "instructions" => Ok(Self::Instructions),
            "prep_time" => Ok(Self::PrepTime),
            "cook_time" => Ok(Self::CookTime),
            "servings" => Ok(Self::Servings),
            "image_url" => Ok(Self::ImageUrl),
            "ingredients" => Ok(Self::Ingredients),
            "categories" => Ok(Self::Categories),
            _ => Err(FormError::InvalidKey(value.to_string())),
        }
    }
}

impl TryFrom<Value> for DraftField {
    type Error = FormError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value.as_str() {
            Some(value) => value.parse(),
            None => Err(FormError::invalid_type("field", "expected a string")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    FullName,
    Username,
    Bio,
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Username => "username",
            Self::Bio => "bio",
        }
    }
}

impl Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "full_name" => Ok(Self::FullName),
            "username" => Ok(Self::Username),
            "bio" => Ok(Self::Bio),
            _ => Err(FormError::InvalidKey(value.to_string())),
        }
    }
}

impl TryFrom<Value> for ProfileField {
    type Error = FormError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value.as_str() {
            Some(value) => value.parse(),
            None => Err(FormError::invalid_type("field", "expected a string")),
        }
    }
}

/// What a recipe remembers about its author.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSnapshot {
    pub id: UserId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: Option<u32>,

    pub ingredients: Vec<String>,
    #[serde(default)]
    pub categories: BTreeSet<String>,

    #[serde(default)]
    pub author: Option<AuthorSnapshot>,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Minutes of prep and cooking; unset times count as zero.
    pub fn total_time(&self) -> u32 {
        self.prep_time
            .unwrap_or(0)
            .saturating_add(self.cook_time.unwrap_or(0))
    }

    pub fn has_category(&self, label: &str) -> bool {
        self.categories.contains(label)
    }

    pub fn is_authored_by(&self, username: &str) -> bool {
        self.author
            .as_ref()
            .is_some_and(|author| author.username == username)
    }

    /// Categories in vocabulary order; labels outside the vocabulary go last.
    pub fn display_categories(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.categories.iter().map(String::as_str).collect();
        labels.sort_by_key(|label| (category_position(label).unwrap_or(usize::MAX), *label));
        labels
    }
}

/// The editable subset of a [`User`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFields {
    pub full_name: String,
    pub username: String,
    pub bio: String,
}

impl ProfileFields {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::Username => &self.username,
            ProfileField::Bio => &self.bio,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::FullName => self.full_name = value,
            ProfileField::Username => self.username = value,
            ProfileField::Bio => self.bio = value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,

    // Owned by the persistence layer; read-only here.
    #[serde(default)]
    pub recipe_count: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
}

impl User {
    pub fn profile(&self) -> ProfileFields {
        ProfileFields {
            full_name: self.full_name.to_owned(),
            username: self.username.to_owned(),
            bio: self.bio.to_owned(),
        }
    }

    pub(crate) fn commit_profile(&mut self, fields: ProfileFields) {
        self.full_name = fields.full_name;
        self.username = fields.username;
        self.bio = fields.bio;
    }

    pub fn author_snapshot(&self) -> AuthorSnapshot {
        AuthorSnapshot {
            id: self.id.to_owned(),
            username: self.username.to_owned(),
            avatar_url: self.avatar_url.to_owned(),
        }
    }
}
