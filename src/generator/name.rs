use crate::phrases::PhraseBook;
use rand::Rng;

/// Build a title as `"<base> <style>"` from two independent picks
pub fn compose_name<R: Rng + ?Sized>(phrases: &PhraseBook, rng: &mut R) -> String {
    let bases = phrases.base_names();
    let styles = phrases.styles();
    let base = &bases[rng.gen_range(0..bases.len())];
    let style = &styles[rng.gen_range(0..styles.len())];
    format!("{} {}", base, style)
}
