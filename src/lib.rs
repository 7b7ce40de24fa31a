//! Recept Roulette: random, deliberately absurd recipe suggestions.
//!
//! Ingredient names come from an [`IngredientProvider`] (usually an export of
//! the Swedish food database); titles, portions and instructions are drawn
//! from a [`PhraseBook`].
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use recept_roulette::RecipeGenerator;
//!
//! let pool: Vec<String> = ["Mjölk", "Ägg", "Mjöl"].iter().map(|s| s.to_string()).collect();
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//! let recipe = RecipeGenerator::default().generate_recipe(&pool, 2, &mut rng).unwrap();
//! assert_eq!(recipe.instructions().len(), 3);
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod phrases;
pub mod template;

pub use builder::{RecipeRoulette, RecipeRouletteBuilder};
pub use catalog::{
    IngredientProvider, JsonCatalog, LineCatalog, StaticCatalog, TableCatalog, WorkbookCatalog,
};
pub use config::{load_config, CatalogConfig, PhrasesConfig, RouletteConfig};
pub use error::RouletteError;
pub use generator::RecipeGenerator;
pub use model::{Recipe, Step};
pub use phrases::PhraseBook;
pub use template::StepTemplate;

/// Generate a recipe from `pool` using the built-in phrases and the thread rng
///
/// # Example
/// ```
/// let pool = vec!["Salt".to_string(), "Socker".to_string()];
/// let recipe = recept_roulette::generate_recipe(&pool, 7).unwrap();
/// assert_eq!(recipe.ingredients().len(), 2);
/// ```
pub fn generate_recipe(pool: &[String], requested_count: i64) -> Result<Recipe, RouletteError> {
    RecipeGenerator::default().generate_recipe(pool, requested_count, &mut rand::thread_rng())
}
