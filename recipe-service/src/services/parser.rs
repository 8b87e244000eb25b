//! Marker-token parsing of generated recipe text.
//!
//! The generation prompt asks the model to frame its output with three
//! literal marker tokens. Models do not always comply, and a missing marker
//! degrades to an empty string for every field downstream of it rather than
//! an error: a partially usable recipe gets stored instead of failing the
//! whole request. The degradation is logged so malformed generations stay
//! observable.

/// Precedes the recipe title.
pub const TITLE_MARKER: &str = "1_2_3:";

/// Precedes the ingredients block.
pub const INGREDIENTS_MARKER: &str = "2_3_4:";

/// Precedes the instructions block.
pub const INSTRUCTIONS_MARKER: &str = "3_4_5:";

/// Generated text split into its three blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecipe {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
}

/// Split generated text on the first occurrence of each marker.
pub fn parse_recipe(text: &str) -> ParsedRecipe {
    let (title_region, remainder) = match text.split_once(INGREDIENTS_MARKER) {
        Some((title, rest)) => (title, Some(rest)),
        None => {
            tracing::warn!(
                marker = INGREDIENTS_MARKER,
                "Generated text is missing a marker; ingredients and instructions degrade to empty"
            );
            (text, None)
        }
    };

    let title = title_region.replace(TITLE_MARKER, "").trim().to_string();

    let (ingredients, instructions) = match remainder {
        Some(rest) => match rest.split_once(INSTRUCTIONS_MARKER) {
            Some((ingredients, instructions)) => (
                ingredients.trim().to_string(),
                instructions.trim().to_string(),
            ),
            None => {
                tracing::warn!(
                    marker = INSTRUCTIONS_MARKER,
                    "Generated text is missing a marker; instructions degrade to empty"
                );
                (rest.trim().to_string(), String::new())
            }
        },
        None => (String::new(), String::new()),
    };

    ParsedRecipe {
        title,
        ingredients,
        instructions,
    }
}
