pub mod recipe;

pub use recipe::RecipeRecord;
