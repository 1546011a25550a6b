use rand::{Rng, seq::SliceRandom};
use tracing::{debug, instrument, warn};

use crate::domain::{
    ingredient::entities::IngredientSet,
    recipe::{
        entities::Recipe,
        ports::TextGenerator,
        templates::{
            PANTRY_ADDITIONS, RECIPE_TEMPLATES, SECONDARY_PLACEHOLDER, TITLE_CATEGORIES,
            generic_titles, main_ingredient_steps, secondary_ingredient_steps,
        },
        value_objects::{RecipePrompt, RecipeRejection},
    },
    vocabulary::VOCABULARY,
};

/// Turns an ingredient set into recipe text.
///
/// Tries the text generator first when one is available and keeps its output
/// only if it looks like a recipe. Otherwise the template fallback is filled
/// using `rng`, so a seeded generator yields a reproducible recipe.
#[instrument(skip_all, fields(ingredients = ingredients.len()))]
pub async fn synthesize_recipe<G, R>(
    ingredients: &IngredientSet,
    generator: Option<&G>,
    rng: &mut R,
) -> Recipe
where
    G: TextGenerator,
    R: Rng + Send,
{
    let food_items = filter_food_items(ingredients);
    if food_items.is_empty() {
        return Recipe::no_ingredients();
    }

    if let Some(generator) = generator {
        match generate_recipe(generator, &food_items).await {
            Ok(text) => return Recipe::generated(text),
            Err(rejection) => warn!("falling back to template recipe: {}", rejection),
        }
    }

    Recipe::template(render_template_recipe(&food_items, rng))
}

/// Drops stop words and person words that slipped into the set.
pub fn filter_food_items(ingredients: &IngredientSet) -> Vec<String> {
    ingredients
        .iter()
        .filter(|item| !VOCABULARY.is_stop_word(item))
        .cloned()
        .collect()
}

pub async fn generate_recipe<G: TextGenerator>(
    generator: &G,
    food_items: &[String],
) -> Result<String, RecipeRejection> {
    let prompt = RecipePrompt::new(food_items);
    debug!(prompt = prompt.as_str(), "requesting generated recipe");

    let output = generator
        .generate_text(prompt.as_str().to_string())
        .await
        .map_err(RecipeRejection::Generator)?;

    let recipe = prompt.strip_from(&output);
    validate_generated_recipe(&recipe)?;

    Ok(recipe)
}

pub fn validate_generated_recipe(recipe: &str) -> Result<(), RecipeRejection> {
    let lines = recipe.split('\n').count();
    if lines < 3 {
        return Err(RecipeRejection::TooFewLines(lines));
    }

    if !recipe.to_lowercase().contains("ingredient") {
        return Err(RecipeRejection::MissingIngredients);
    }

    Ok(())
}

pub fn render_template_recipe<R: Rng + ?Sized>(food_items: &[String], rng: &mut R) -> String {
    let template = *pick(&RECIPE_TEMPLATES, rng);

    let addition_count = rng.gen_range(2..=3);
    let mut items: Vec<&str> = food_items.iter().map(String::as_str).collect();
    items.extend(PANTRY_ADDITIONS.choose_multiple(rng, addition_count).copied());

    let ingredients_block = items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n");

    let main_ingredient = food_items.first().map(String::as_str).unwrap_or("ingredients");
    let secondary_ingredient = food_items
        .get(1)
        .map(String::as_str)
        .unwrap_or(SECONDARY_PLACEHOLDER);

    let main_step = pick(&main_ingredient_steps(main_ingredient), rng).clone();
    let secondary_step = pick(&secondary_ingredient_steps(secondary_ingredient), rng).clone();
    let title = choose_title(food_items, main_ingredient, rng);

    template
        .replace("{ingredients}", &ingredients_block)
        .replace("{main_step}", &main_step)
        .replace("{secondary_step}", &secondary_step)
        .replace("{title}", &title)
}

fn choose_title<R: Rng + ?Sized>(food_items: &[String], main_ingredient: &str, rng: &mut R) -> String {
    let haystack = food_items.join(", ").to_lowercase();

    for (keywords, titles) in &TITLE_CATEGORIES {
        if keywords.iter().any(|keyword| haystack.contains(keyword)) {
            return pick(titles, rng).to_string();
        }
    }

    pick(&generic_titles(&title_case(main_ingredient)), rng).clone()
}

fn pick<'a, T, R: Rng + ?Sized>(options: &'a [T], rng: &mut R) -> &'a T {
    &options[rng.gen_range(0..options.len())]
}

/// Uppercases the first letter of every alphabetic run, lowercases the rest.
fn title_case(text: &str) -> String {
    let mut previous_alphabetic = false;
    text.chars()
        .flat_map(|c| {
            let mapped: Vec<char> = if previous_alphabetic {
                c.to_lowercase().collect()
            } else {
                c.to_uppercase().collect()
            };
            previous_alphabetic = c.is_alphabetic();
            mapped
        })
        .collect()
}
