use crate::error::RouletteError;

const INGREDIENT_FIELD: &str = "ingredient";
const MINUTES_FIELD: &str = "minutes";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Ingredient,
    Minutes,
}

/// A parsed instruction pattern such as `Stek **{ingredient}** i {minutes} minuter.`
///
/// Templates are parsed once when the phrase book is built, so rendering
/// cannot fail. `{{` and `}}` produce literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl StepTemplate {
    pub fn parse(source: &str) -> Result<Self, RouletteError> {
        let invalid = |reason: String| RouletteError::InvalidTemplate {
            template: source.to_string(),
            reason,
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(invalid("unclosed '{'".to_string()));
                    }

                    let segment = match name.trim() {
                        INGREDIENT_FIELD => Segment::Ingredient,
                        MINUTES_FIELD => Segment::Minutes,
                        other => {
                            return Err(invalid(format!("unknown placeholder '{{{}}}'", other)))
                        }
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                '}' => return Err(invalid("unmatched '}'".to_string())),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        for (field, segment) in [
            (INGREDIENT_FIELD, Segment::Ingredient),
            (MINUTES_FIELD, Segment::Minutes),
        ] {
            if !segments.contains(&segment) {
                return Err(invalid(format!("missing '{{{}}}' placeholder", field)));
            }
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Fill in the ingredient name and cook time
    pub fn render(&self, ingredient: &str, minutes: u32) -> String {
        let mut out = String::with_capacity(self.source.len() + ingredient.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Ingredient => out.push_str(ingredient),
                Segment::Minutes => out.push_str(&minutes.to_string()),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_both_slots() {
        let template = StepTemplate::parse("Stek **{ingredient}** i {minutes} minuter.").unwrap();
        assert_eq!(template.render("Ägg", 7), "Stek **Ägg** i 7 minuter.");
    }

    #[test]
    fn test_slots_may_repeat_and_reorder() {
        let template =
            StepTemplate::parse("{minutes} min: {ingredient}, sedan mer {ingredient}").unwrap();
        assert_eq!(template.render("salt", 3), "3 min: salt, sedan mer salt");
    }

    #[test]
    fn test_escaped_braces() {
        let template = StepTemplate::parse("{{{ingredient}}} i {minutes}}}").unwrap();
        assert_eq!(template.render("Mjöl", 12), "{Mjöl} i 12}");
    }

    #[test]
    fn test_ingredient_text_is_not_interpreted() {
        let template = StepTemplate::parse("Koka {ingredient} i {minutes} min").unwrap();
        assert_eq!(
            template.render("Ost {minutes} {x}", 4),
            "Koka Ost {minutes} {x} i 4 min"
        );
    }

    #[test]
    fn test_unknown_placeholder_is_rejected() {
        let err = StepTemplate::parse("Stek {ing} i {minutes}").unwrap_err();
        assert!(err.to_string().contains("unknown placeholder"));
    }

    #[test]
    fn test_missing_placeholder_is_rejected() {
        let err = StepTemplate::parse("Riv {ingredient} fint").unwrap_err();
        assert!(err.to_string().contains("missing '{minutes}'"));

        let err = StepTemplate::parse("Vänta {minutes} minuter").unwrap_err();
        assert!(err.to_string().contains("missing '{ingredient}'"));
    }

    #[test]
    fn test_unbalanced_braces_are_rejected() {
        assert!(StepTemplate::parse("Stek {ingredient i {minutes}").is_err());
        assert!(StepTemplate::parse("Stek {ingredient} } i {minutes}").is_err());
        assert!(StepTemplate::parse("Stek {ingredient} i {minutes").is_err());
    }
}
