mod instructions;
mod name;
mod portions;
mod sampler;

pub use instructions::compose_instructions;
pub use name::compose_name;
pub use portions::pick_portions;
pub use sampler::sample;

use crate::error::RouletteError;
use crate::model::Recipe;
use crate::phrases::PhraseBook;
use log::debug;
use rand::Rng;

/// Composes recipes from an ingredient pool and a phrase book.
///
/// The generator holds no mutable state; randomness comes from the `rng`
/// passed to each call, so a seeded source gives reproducible recipes.
#[derive(Debug, Clone, Default)]
pub struct RecipeGenerator {
    phrases: PhraseBook,
}

impl RecipeGenerator {
    pub fn new(phrases: PhraseBook) -> Self {
        Self { phrases }
    }

    pub fn phrases(&self) -> &PhraseBook {
        &self.phrases
    }

    /// Generate one recipe with up to `requested_count` ingredients from `pool`.
    ///
    /// An empty pool is not an error: the recipe simply has no ingredients and
    /// a single closing step. A negative count is rejected.
    pub fn generate_recipe<R: Rng + ?Sized>(
        &self,
        pool: &[String],
        requested_count: i64,
        rng: &mut R,
    ) -> Result<Recipe, RouletteError> {
        let count = usize::try_from(requested_count)
            .map_err(|_| RouletteError::InvalidRequestCount(requested_count))?;

        let ingredients = sample(pool, count, rng);
        debug!(
            "Sampled {} of {} requested ingredients from a pool of {}",
            ingredients.len(),
            count,
            pool.len()
        );

        let title = compose_name(&self.phrases, rng);
        let portions = pick_portions(&self.phrases, rng);
        let instructions = compose_instructions(&ingredients, &self.phrases, rng);

        Ok(Recipe::new(title, portions, ingredients, instructions))
    }
}
