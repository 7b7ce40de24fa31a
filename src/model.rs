use serde::Serialize;
use std::fmt;

/// One numbered instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub number: usize,
    pub text: String,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.text)
    }
}

/// A generated recipe.
///
/// Built once by [`crate::RecipeGenerator`] and never changed afterwards, so
/// the fields are only exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    title: String,
    portions: u32,
    ingredients: Vec<String>,
    instructions: Vec<Step>,
}

impl Recipe {
    pub(crate) fn new(
        title: String,
        portions: u32,
        ingredients: Vec<String>,
        instructions: Vec<Step>,
    ) -> Self {
        Self {
            title,
            portions,
            ingredients,
            instructions,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn portions(&self) -> u32 {
        self.portions
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[Step] {
        &self.instructions
    }

    /// True when the pool had nothing to offer; the caller decides how to tell the user
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Instructions as numbered lines joined with newlines
    pub fn instructions_text(&self) -> String {
        self.instructions
            .iter()
            .map(|step| step.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the recipe as a Markdown card
    pub fn to_markdown(&self) -> String {
        let mut out = format!(
            "### {}\n*Ca {} portion(er)*\n\n**Ingredienser**\n",
            self.title, self.portions
        );
        for ingredient in &self.ingredients {
            out.push_str(&format!("- {}\n", ingredient));
        }
        out.push_str("\n**Gör så här**\n");
        out.push_str(&self.instructions_text());
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe::new(
            "Matlådelotto deluxe".to_string(),
            2,
            vec!["Ägg".to_string(), "Salt".to_string()],
            vec![
                Step {
                    number: 1,
                    text: "Stek **Ägg** i 5 minuter.".to_string(),
                },
                Step {
                    number: 2,
                    text: "Koka **Salt** i 9 minuter.".to_string(),
                },
                Step {
                    number: 3,
                    text: "Servera direkt.".to_string(),
                },
            ],
        )
    }

    #[test]
    fn test_step_display() {
        let step = Step {
            number: 4,
            text: "Servera direkt.".to_string(),
        };
        assert_eq!(step.to_string(), "4. Servera direkt.");
    }

    #[test]
    fn test_to_markdown() {
        let markdown = sample_recipe().to_markdown();
        let expected = "### Matlådelotto deluxe\n\
                        *Ca 2 portion(er)*\n\
                        \n\
                        **Ingredienser**\n\
                        - Ägg\n\
                        - Salt\n\
                        \n\
                        **Gör så här**\n\
                        1. Stek **Ägg** i 5 minuter.\n\
                        2. Koka **Salt** i 9 minuter.\n\
                        3. Servera direkt.\n";
        assert_eq!(markdown, expected);
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(sample_recipe()).unwrap();
        assert_eq!(json["title"], "Matlådelotto deluxe");
        assert_eq!(json["portions"], 2);
        assert_eq!(json["ingredients"][1], "Salt");
        assert_eq!(json["instructions"][2]["number"], 3);
    }

    #[test]
    fn test_is_empty() {
        let recipe = Recipe::new(
            "Friformsgryta".to_string(),
            1,
            vec![],
            vec![Step {
                number: 1,
                text: "Servera direkt.".to_string(),
            }],
        );
        assert!(recipe.is_empty());
        assert!(!sample_recipe().is_empty());
    }
}
