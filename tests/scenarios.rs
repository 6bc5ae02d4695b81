use chrono::Utc;
use flavorshare_sdk::{
    filter_recipes,
    schema::{AuthorSnapshot, DraftField, ProfileField, Recipe, User},
    CoreEvent, Outbox, ProfileEditor, RecipeAuthoringForm, RecipeCatalog, Session, ALL_CATEGORIES,
};
use rstest::{fixture, rstest};

fn recipe(id: &str, title: &str, description: &str, author: &str, categories: &[&str]) -> Recipe {
    Recipe {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        instructions: "See card.".into(),
        image_url: None,
        prep_time: None,
        cook_time: None,
        servings: None,
        ingredients: vec!["love".into()],
        categories: categories.iter().map(|c| c.to_string()).collect(),
        author: Some(AuthorSnapshot {
            id: author.into(),
            username: author.into(),
            avatar_url: None,
        }),
        created_at: Utc::now(),
    }
}

#[fixture]
fn collection() -> Vec<Recipe> {
    vec![
        recipe(
            "1",
            "Creamy Tomato Basil Pasta",
            "A rich and creamy pasta dish with fresh basil and perfectly ripe tomatoes.",
            "chef_maria",
            &["Dinner", "Italian"],
        ),
        recipe(
            "2",
            "Decadent Chocolate Cake",
            "Moist chocolate cake with rich frosting and fresh berries.",
            "baker_john",
            &["Dessert", "Chocolate"],
        ),
        recipe(
            "3",
            "Healthy Breakfast Bowl",
            "Start your day right with this nutritious breakfast bowl.",
            "wellness_guru",
            &["Breakfast", "Healthy"],
        ),
    ]
}

fn maria() -> User {
    User {
        id: "1".into(),
        username: "chef_maria".into(),
        full_name: "Maria Rodriguez".into(),
        email: Some("maria@example.com".into()),
        bio: "Passionate home cook.".into(),
        avatar_url: None,
        created_at: Utc::now(),
        recipe_count: 12,
        followers: 245,
        following: 89,
    }
}

fn titles(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.title.to_owned()).collect()
}

#[rstest]
fn browse_scenario(collection: Vec<Recipe>) {
    assert_eq!(
        titles(&filter_recipes(&collection, "pasta", ALL_CATEGORIES)),
        vec!["Creamy Tomato Basil Pasta"]
    );
    assert_eq!(
        titles(&filter_recipes(&collection, "", "Dessert")),
        vec!["Decadent Chocolate Cake"]
    );
    assert!(filter_recipes(&collection, "zzz", ALL_CATEGORIES).is_empty());
    assert_eq!(filter_recipes(&collection, "", ALL_CATEGORIES).len(), 3);
}

#[rstest]
fn authored_recipe_reaches_persistence_and_catalog(collection: Vec<Recipe>) {
    let session = Session::Authenticated(maria());
    let (outbox, mut persistence) = Outbox::channel();
    let mut form = RecipeAuthoringForm::new(outbox);
    let mut catalog = RecipeCatalog::new(collection);
    catalog.set_query("pesto");
    assert!(catalog.view().is_empty);

    form.set_title("Pesto Pasta");
    form.set_description("Bright basil pesto tossed through pasta.");
    form.set_instructions("Blend the pesto, boil the pasta, combine.");
    form.set_field(DraftField::Servings, "2").unwrap();
    form.update_ingredient_row(0, "basil").unwrap();
    form.add_ingredient_row();
    form.update_ingredient_row(1, "pine nuts").unwrap();
    form.toggle_category("Italian");

    let recipe = form.submit(&session).unwrap();
    assert_eq!(form.draft().ingredients(), &[String::new()]);
    assert!(form.draft().categories().is_empty());

    let event = persistence.try_recv().unwrap();
    assert_eq!(event, CoreEvent::RecipeSubmitted(recipe.clone()));

    catalog.insert(recipe);
    let view = catalog.view();
    assert_eq!(titles(&view.recipes), vec!["Pesto Pasta"]);
    assert_eq!(catalog.by_author("chef_maria").len(), 2);
}

#[test]
fn two_blank_rows_block_submission() {
    let mut form = RecipeAuthoringForm::new(Outbox::detached());
    form.set_title("Toast");
    form.set_description("Bread, but warmer.");
    form.set_instructions("Toast the bread.");
    form.add_ingredient_row();

    let errors = form.submit(&Session::Anonymous).unwrap_err();
    assert_eq!(errors.fields(), vec![DraftField::Ingredients]);
    assert_eq!(form.draft().ingredients().len(), 2);
}

#[test]
fn cancelled_profile_edit_keeps_committed_bio() {
    let (outbox, mut persistence) = Outbox::channel();
    let mut editor = ProfileEditor::from_session(&Session::Authenticated(maria()), outbox).unwrap();

    editor.begin_edit();
    editor.update_draft_field("bio".parse::<ProfileField>().unwrap(), "new bio");
    editor.cancel();

    assert_eq!(editor.user().bio, "Passionate home cook.");
    assert!(persistence.try_recv().is_err());
}

#[test]
fn submission_payload_serializes_for_transport() {
    let mut form = RecipeAuthoringForm::new(Outbox::detached());
    form.set_title("Lemonade");
    form.set_description("Sharp and sweet.");
    form.set_instructions("Squeeze, stir, chill.");
    form.update_ingredient_row(0, "lemons").unwrap();
    form.toggle_category("quick_and_easy");

    let recipe = form.submit(&Session::Authenticated(maria())).unwrap();
    let value = serde_json::to_value(CoreEvent::RecipeSubmitted(recipe)).unwrap();

    assert_eq!(value["type"], "recipe_submitted");
    assert_eq!(value["payload"]["title"], "Lemonade");
    assert_eq!(value["payload"]["categories"][0], "Quick & Easy");
    assert_eq!(value["payload"]["author"]["username"], "chef_maria");
    assert!(value["payload"].get("image_url").is_none());
}
