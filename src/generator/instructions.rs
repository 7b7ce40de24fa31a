use crate::model::Step;
use crate::phrases::PhraseBook;
use rand::Rng;

/// Build numbered steps, one per ingredient, followed by a closing remark.
///
/// Each ingredient step uses a randomly chosen template and a cook time drawn
/// from the phrase book's range. The closing step is always last and is
/// numbered `ingredients.len() + 1`.
pub fn compose_instructions<R: Rng + ?Sized>(
    ingredients: &[String],
    phrases: &PhraseBook,
    rng: &mut R,
) -> Vec<Step> {
    let templates = phrases.step_templates();
    let mut steps = Vec::with_capacity(ingredients.len() + 1);

    for (i, ingredient) in ingredients.iter().enumerate() {
        let template = &templates[rng.gen_range(0..templates.len())];
        let minutes = rng.gen_range(phrases.cook_time());
        steps.push(Step {
            number: i + 1,
            text: template.render(ingredient, minutes),
        });
    }

    let remarks = phrases.closing_remarks();
    steps.push(Step {
        number: ingredients.len() + 1,
        text: remarks[rng.gen_range(0..remarks.len())].clone(),
    });

    steps
}
