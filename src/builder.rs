use std::fmt;
use std::sync::Mutex;

use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{IngredientProvider, PhraseBook, Recipe, RecipeGenerator, RouletteError};

/// Generates recipes from a cached ingredient pool.
///
/// Owns its random source behind a mutex, so one instance can be shared
/// between threads.
pub struct RecipeRoulette {
    generator: RecipeGenerator,
    pool: Vec<String>,
    rng: Mutex<ChaCha8Rng>,
}

impl RecipeRoulette {
    /// Start configuring a new roulette
    ///
    /// # Example
    /// ```
    /// use recept_roulette::RecipeRoulette;
    ///
    /// let roulette = RecipeRoulette::builder()
    ///     .ingredients(vec!["Mjölk".to_string(), "Ägg".to_string()])
    ///     .seed(7)
    ///     .build()
    ///     .unwrap();
    /// let recipe = roulette.generate(2).unwrap();
    /// assert_eq!(recipe.ingredients().len(), 2);
    /// ```
    pub fn builder() -> RecipeRouletteBuilder {
        RecipeRouletteBuilder::default()
    }

    /// Generate a recipe with up to `requested_count` ingredients
    ///
    /// # Errors
    /// Returns [`RouletteError::InvalidRequestCount`] for a negative count.
    pub fn generate(&self, requested_count: i64) -> Result<Recipe, RouletteError> {
        // rng state stays valid across a poisoned lock
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        self.generator
            .generate_recipe(&self.pool, requested_count, &mut *rng)
    }

    /// The cached ingredient names
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    pub fn phrases(&self) -> &PhraseBook {
        self.generator.phrases()
    }
}

impl fmt::Debug for RecipeRoulette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeRoulette")
            .field("pool_size", &self.pool.len())
            .finish_non_exhaustive()
    }
}

enum PoolSource {
    Names(Vec<String>),
    Provider(Box<dyn IngredientProvider>),
}

/// Builder for [`RecipeRoulette`]
#[derive(Default)]
pub struct RecipeRouletteBuilder {
    phrases: Option<PhraseBook>,
    source: Option<PoolSource>,
    seed: Option<u64>,
}

impl RecipeRouletteBuilder {
    /// Use custom phrase tables instead of the built-in ones
    pub fn phrases(mut self, phrases: PhraseBook) -> Self {
        self.phrases = Some(phrases);
        self
    }

    /// Read the ingredient pool from a provider when building
    ///
    /// # Example
    /// ```
    /// use recept_roulette::{RecipeRoulette, StaticCatalog};
    ///
    /// let catalog: StaticCatalog = ["Salt", "Socker"].into_iter().collect();
    /// let roulette = RecipeRoulette::builder().provider(catalog).build().unwrap();
    /// assert_eq!(roulette.pool().len(), 2);
    /// ```
    pub fn provider(mut self, provider: impl IngredientProvider + 'static) -> Self {
        self.source = Some(PoolSource::Provider(Box::new(provider)));
        self
    }

    /// Same as [`Self::provider`] for an already boxed provider
    pub fn boxed_provider(mut self, provider: Box<dyn IngredientProvider>) -> Self {
        self.source = Some(PoolSource::Provider(provider));
        self
    }

    /// Use a ready list of ingredient names
    pub fn ingredients(mut self, names: Vec<String>) -> Self {
        self.source = Some(PoolSource::Names(names));
        self
    }

    /// Seed the random source for reproducible recipes
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load the ingredient pool and assemble the roulette
    ///
    /// # Errors
    /// Returns the provider's error if the pool cannot be loaded.
    /// A pool that loads but is empty is accepted.
    pub fn build(self) -> Result<RecipeRoulette, RouletteError> {
        let pool = match self.source {
            Some(PoolSource::Names(names)) => names,
            Some(PoolSource::Provider(provider)) => provider.ingredient_names()?,
            None => Vec::new(),
        };

        if pool.is_empty() {
            warn!("Ingredient pool is empty; recipes will have no ingredients");
        } else {
            info!("Loaded {} ingredient names", pool.len());
        }

        let rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(RecipeRoulette {
            generator: RecipeGenerator::new(self.phrases.unwrap_or_default()),
            pool,
            rng: Mutex::new(rng),
        })
    }
}
