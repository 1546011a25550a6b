//! Fixed text used by the template fallback.
//!
//! Every recipe template carries the `{title}`, `{ingredients}`,
//! `{main_step}` and `{secondary_step}` placeholders and six numbered steps.

pub const RECIPE_TEMPLATES: [&str; 3] = [
    "{title}\n\nIngredients:\n{ingredients}\n\nInstructions:\n\
1. Preheat the oven to 375°F (190°C).\n\
2. Prepare all ingredients: wash, peel, and chop as needed.\n\
3. {main_step}\n\
4. {secondary_step}\n\
5. Cook for about 20-25 minutes until done.\n\
6. Season with salt, pepper, and herbs to taste, then serve hot.",
    "{title}\n\nIngredients:\n{ingredients}\n\nInstructions:\n\
1. Heat oil in a large pan over medium heat.\n\
2. {main_step}\n\
3. {secondary_step}\n\
4. Add the remaining ingredients and cook for 10-15 minutes.\n\
5. Season with salt and pepper to taste.\n\
6. Garnish and serve immediately.",
    "{title}\n\nIngredients:\n{ingredients}\n\nInstructions:\n\
1. {main_step}\n\
2. In a separate bowl, combine all spices and seasonings.\n\
3. {secondary_step}\n\
4. Mix everything together and cook for 15-20 minutes.\n\
5. Check for doneness and adjust seasonings if needed.\n\
6. Let rest for 5 minutes before serving.",
];

pub const PANTRY_ADDITIONS: [&str; 6] = [
    "Salt and pepper to taste",
    "2 tablespoons olive oil",
    "1 clove garlic, minced",
    "Fresh herbs for garnish",
    "1/2 teaspoon paprika",
    "1 tablespoon butter",
];

pub const SECONDARY_PLACEHOLDER: &str = "other ingredients";

pub fn main_ingredient_steps(ingredient: &str) -> [String; 5] {
    [
        format!("Add the {ingredient} to the pan and sauté until golden."),
        format!("Place the {ingredient} in a baking dish and season well."),
        format!("Combine the {ingredient} with spices and mix thoroughly."),
        format!("Cut the {ingredient} into bite-sized pieces and set aside."),
        format!("In a large bowl, marinate the {ingredient} with olive oil and spices."),
    ]
}

pub fn secondary_ingredient_steps(ingredient: &str) -> [String; 5] {
    [
        format!("Add the {ingredient} and cook for another 5 minutes."),
        format!("Sprinkle the {ingredient} over the top and continue cooking."),
        format!("Mix in the {ingredient} until well combined."),
        format!("Layer the {ingredient} on top and bake until golden."),
        format!("Stir in the {ingredient} and simmer for 10 minutes."),
    ]
}

/// Title categories in match priority order.
pub const TITLE_CATEGORIES: [(&[&str], [&str; 5]); 5] = [
    (
        &["potato"],
        [
            "Delicious Potato Dish",
            "Roasted Potato Medley",
            "Potato Comfort Food",
            "Creamy Potato Casserole",
            "Herb-Infused Potato Recipe",
        ],
    ),
    (
        &["chicken"],
        [
            "Savory Chicken Recipe",
            "Herb-Roasted Chicken",
            "Classic Chicken Dish",
            "Tender Chicken Delight",
            "Spiced Chicken Creation",
        ],
    ),
    (
        &["vegetable", "vegetables"],
        [
            "Garden Vegetable Medley",
            "Roasted Vegetable Platter",
            "Seasonal Vegetable Dish",
            "Colorful Vegetable Stir-Fry",
            "Vegetable Harmony Bowl",
        ],
    ),
    (
        &["beef"],
        [
            "Hearty Beef Stew",
            "Tender Beef Recipe",
            "Savory Beef Dish",
            "Slow-Cooked Beef Delight",
            "Spiced Beef Creation",
        ],
    ),
    (
        &["fish", "salmon"],
        [
            "Delicate Fish Recipe",
            "Perfectly Seasoned Fish",
            "Baked Fish Delight",
            "Zesty Fish Creation",
            "Herb-Crusted Fish Dish",
        ],
    ),
];

pub fn generic_titles(ingredient: &str) -> [String; 5] {
    [
        format!("{ingredient} Special"),
        format!("Homemade {ingredient} Recipe"),
        format!("Easy {ingredient} Dish"),
        format!("Gourmet {ingredient} Creation"),
        format!("Delicious {ingredient} Medley"),
    ]
}
