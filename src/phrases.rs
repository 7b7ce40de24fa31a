use crate::config::PhrasesConfig;
use crate::error::RouletteError;
use crate::template::StepTemplate;
use std::ops::RangeInclusive;

/// Validated phrase tables the generator draws from.
///
/// Every table is guaranteed non-empty, so the composers can pick from them
/// without checking. Build one with [`PhraseBook::from_config`] or use
/// [`PhraseBook::default`] for the built-in Swedish vocabulary.
#[derive(Debug, Clone)]
pub struct PhraseBook {
    base_names: Vec<String>,
    styles: Vec<String>,
    step_templates: Vec<StepTemplate>,
    closing_remarks: Vec<String>,
    cook_time: RangeInclusive<u32>,
    portions: Vec<u32>,
}

impl PhraseBook {
    pub fn from_config(config: &PhrasesConfig) -> Result<Self, RouletteError> {
        let base_names = non_empty("base_names", &config.base_names)?;
        let styles = non_empty("styles", &config.styles)?;
        let closing_remarks = non_empty("closing_remarks", &config.closing_remarks)?;

        non_empty("step_templates", &config.step_templates)?;
        let step_templates = config
            .step_templates
            .iter()
            .map(|t| StepTemplate::parse(t))
            .collect::<Result<Vec<_>, _>>()?;

        if config.portions.is_empty() {
            return Err(RouletteError::Configuration(
                "portions must contain at least one value".to_string(),
            ));
        }
        if config.portions.contains(&0) {
            return Err(RouletteError::Configuration(
                "portions must be positive".to_string(),
            ));
        }

        if config.cook_time_min > config.cook_time_max {
            return Err(RouletteError::Configuration(format!(
                "cook_time_min ({}) is greater than cook_time_max ({})",
                config.cook_time_min, config.cook_time_max
            )));
        }

        Ok(Self {
            base_names,
            styles,
            step_templates,
            closing_remarks,
            cook_time: config.cook_time_min..=config.cook_time_max,
            portions: config.portions.clone(),
        })
    }

    pub fn base_names(&self) -> &[String] {
        &self.base_names
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    pub fn step_templates(&self) -> &[StepTemplate] {
        &self.step_templates
    }

    pub fn closing_remarks(&self) -> &[String] {
        &self.closing_remarks
    }

    pub fn cook_time(&self) -> RangeInclusive<u32> {
        self.cook_time.clone()
    }

    pub fn portions(&self) -> &[u32] {
        &self.portions
    }
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self::from_config(&PhrasesConfig::default())
            .expect("built-in phrase tables must be valid")
    }
}

/// Reject empty tables and tables holding only blank entries
fn non_empty(table: &str, items: &[String]) -> Result<Vec<String>, RouletteError> {
    if items.is_empty() {
        return Err(RouletteError::Configuration(format!(
            "{} must contain at least one entry",
            table
        )));
    }
    if let Some(pos) = items.iter().position(|s| s.trim().is_empty()) {
        return Err(RouletteError::Configuration(format!(
            "{} entry {} is blank",
            table,
            pos + 1
        )));
    }
    Ok(items.to_vec())
}
