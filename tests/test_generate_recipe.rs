use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use recept_roulette::generator::{compose_instructions, pick_portions, sample};
use recept_roulette::{PhraseBook, RecipeGenerator, RouletteError};
use std::collections::HashSet;

fn pool(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn swedish_pantry() -> Vec<String> {
    pool(&["Mjölk", "Ägg", "Mjöl", "Salt", "Socker"])
}

#[test]
fn test_three_from_swedish_pantry() {
    let generator = RecipeGenerator::default();
    let pantry = swedish_pantry();
    let mut rng = ChaCha8Rng::seed_from_u64(2025);

    let recipe = generator.generate_recipe(&pantry, 3, &mut rng).unwrap();

    assert_eq!(recipe.ingredients().len(), 3);
    let unique: HashSet<_> = recipe.ingredients().iter().collect();
    assert_eq!(unique.len(), 3);
    assert!(recipe.ingredients().iter().all(|i| pantry.contains(i)));

    assert!(!recipe.title().is_empty());
    assert!([1, 2, 3, 4].contains(&recipe.portions()));

    let numbers: Vec<usize> = recipe.instructions().iter().map(|s| s.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    let last = &recipe.instructions()[3];
    assert!(generator.phrases().closing_remarks().contains(&last.text));
}

#[test]
fn test_empty_pool_gives_closing_step_only() {
    let generator = RecipeGenerator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let recipe = generator.generate_recipe(&[], 5, &mut rng).unwrap();

    assert!(recipe.ingredients().is_empty());
    assert_eq!(recipe.instructions().len(), 1);
    assert_eq!(recipe.instructions()[0].number, 1);
    assert!(generator
        .phrases()
        .closing_remarks()
        .contains(&recipe.instructions()[0].text));
}

#[test]
fn test_zero_count_gives_closing_step_only() {
    let generator = RecipeGenerator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let recipe = generator.generate_recipe(&swedish_pantry(), 0, &mut rng).unwrap();
    assert!(recipe.is_empty());
    assert_eq!(recipe.instructions().len(), 1);
}

#[test]
fn test_count_clamps_to_pool_size() {
    let generator = RecipeGenerator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let recipe = generator
        .generate_recipe(&pool(&["Havregryn", "Lingon"]), 7, &mut rng)
        .unwrap();
    assert_eq!(recipe.ingredients().len(), 2);
    assert_eq!(recipe.instructions().len(), 3);
}

#[test]
fn test_negative_count_is_an_error() {
    let generator = RecipeGenerator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    match generator.generate_recipe(&swedish_pantry(), -2, &mut rng) {
        Err(RouletteError::InvalidRequestCount(n)) => assert_eq!(n, -2),
        other => panic!("expected InvalidRequestCount, got {:?}", other),
    }
}

#[test]
fn test_sample_length_and_membership_for_many_counts() {
    let pantry: Vec<String> = (0..30).map(|i| format!("Livsmedel nr {}", i)).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(17);

    for size in [0usize, 1, 5, 30] {
        let slice = &pantry[..size];
        for count in [0usize, 1, 4, 30, 100] {
            let picked = sample(slice, count, &mut rng);
            assert_eq!(picked.len(), count.min(size));
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), picked.len());
            assert!(picked.iter().all(|p| slice.contains(p)));
        }
    }
}

#[test]
fn test_every_step_names_its_ingredient_and_a_valid_time() {
    let phrases = PhraseBook::default();
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let ingredients = pool(&[
        "Mjölk mellan 1,5% fett",
        "Ägg rå",
        "Vetemjöl",
        "Salt m. jod",
        "Socker strö- hushålls-",
    ]);

    for _ in 0..50 {
        let steps = compose_instructions(&ingredients, &phrases, &mut rng);
        assert_eq!(steps.len(), ingredients.len() + 1);

        for (ingredient, step) in ingredients.iter().zip(&steps) {
            assert!(step.text.contains(ingredient.as_str()), "{}", step.text);

            // Remove the ingredient so its own digits are not mistaken for the time
            let rest = step.text.replace(ingredient.as_str(), "");
            let minutes: Vec<u32> = rest
                .split(|c: char| !c.is_ascii_digit())
                .filter(|s| !s.is_empty())
                .map(|s| s.parse().unwrap())
                .collect();
            assert_eq!(minutes.len(), 1, "{}", step.text);
            assert!((3..=12).contains(&minutes[0]), "{}", step.text);
        }
    }
}

#[test]
fn test_portions_only_from_fixed_set() {
    let phrases = PhraseBook::default();
    let mut rng = ChaCha8Rng::seed_from_u64(31);

    let seen: HashSet<u32> = (0..500).map(|_| pick_portions(&phrases, &mut rng)).collect();
    assert_eq!(seen, HashSet::from([1, 2, 3, 4]));
}

#[test]
fn test_golden_output_is_stable_for_a_seed() {
    let generator = RecipeGenerator::default();
    let pantry = swedish_pantry();

    let recipes: Vec<_> = (0..2)
        .map(|_| {
            let mut rng = ChaCha8Rng::seed_from_u64(123);
            generator.generate_recipe(&pantry, 4, &mut rng).unwrap()
        })
        .collect();

    assert_eq!(recipes[0], recipes[1]);
    assert_eq!(recipes[0].to_markdown(), recipes[1].to_markdown());
}

#[test]
fn test_different_seeds_eventually_differ() {
    let generator = RecipeGenerator::default();
    let pantry = swedish_pantry();

    let recipes: HashSet<String> = (0..10)
        .map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            generator
                .generate_recipe(&pantry, 3, &mut rng)
                .unwrap()
                .to_markdown()
        })
        .collect();
    assert!(recipes.len() > 1);
}
