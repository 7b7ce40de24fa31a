use crate::phrases::PhraseBook;
use rand::Rng;

/// Pick a serving count uniformly from the configured set
pub fn pick_portions<R: Rng + ?Sized>(phrases: &PhraseBook, rng: &mut R) -> u32 {
    let portions = phrases.portions();
    portions[rng.gen_range(0..portions.len())]
}
