use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct RouletteConfig {
    /// Phrase tables used to compose recipes
    #[serde(default)]
    pub phrases: PhrasesConfig,
    /// Where the ingredient names come from
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Number of ingredients to request when none is given on the command line
    #[serde(default = "default_ingredient_count")]
    pub ingredient_count: i64,
    /// Fixed seed for reproducible output
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            phrases: PhrasesConfig::default(),
            catalog: CatalogConfig::default(),
            ingredient_count: default_ingredient_count(),
            seed: None,
        }
    }
}

/// Raw phrase tables as written in the config file.
///
/// These are validated and turned into a [`crate::PhraseBook`] before use.
#[derive(Debug, Deserialize, Clone)]
pub struct PhrasesConfig {
    /// First half of every recipe title
    #[serde(default = "default_base_names")]
    pub base_names: Vec<String>,
    /// Second half of every recipe title
    #[serde(default = "default_styles")]
    pub styles: Vec<String>,
    /// Instruction patterns with `{ingredient}` and `{minutes}` placeholders
    #[serde(default = "default_step_templates")]
    pub step_templates: Vec<String>,
    /// Sentences used for the final instruction step
    #[serde(default = "default_closing_remarks")]
    pub closing_remarks: Vec<String>,
    /// Shortest cook time in minutes (inclusive)
    #[serde(default = "default_cook_time_min")]
    pub cook_time_min: u32,
    /// Longest cook time in minutes (inclusive)
    #[serde(default = "default_cook_time_max")]
    pub cook_time_max: u32,
    /// Candidate serving counts
    #[serde(default = "default_portions")]
    pub portions: Vec<u32>,
}

impl Default for PhrasesConfig {
    fn default() -> Self {
        Self {
            base_names: default_base_names(),
            styles: default_styles(),
            step_templates: default_step_templates(),
            closing_remarks: default_closing_remarks(),
            cook_time_min: default_cook_time_min(),
            cook_time_max: default_cook_time_max(),
            portions: default_portions(),
        }
    }
}

/// Configuration for the ingredient catalog file
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Path to the exported food database
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
    /// Name of the column holding food names
    #[serde(default = "default_column")]
    pub column: String,
    /// Zero-based row holding the column names; earlier rows are skipped
    #[serde(default = "default_header_row")]
    pub header_row: usize,
    /// Field delimiter for tabular exports
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            column: default_column(),
            header_row: default_header_row(),
            delimiter: default_delimiter(),
        }
    }
}

// Default value functions
fn default_ingredient_count() -> i64 {
    4
}

fn default_cook_time_min() -> u32 {
    3
}

fn default_cook_time_max() -> u32 {
    12
}

fn default_portions() -> Vec<u32> {
    vec![1, 2, 3, 4]
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("LivsmedelsDB_202511142228.xlsx")
}

fn default_column() -> String {
    "Livsmedelsnamn".to_string()
}

fn default_header_row() -> usize {
    2
}

fn default_delimiter() -> char {
    ';'
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_base_names() -> Vec<String> {
    to_strings(&[
        "Kaotisk gryta",
        "Improviserad torsdagsmiddag",
        "Kylskåpsroulette",
        "Freestylad festmåltid",
        "Kulinarisk chansning",
        "Experimentell husmansklassiker",
        "Anarkistisk enpanna",
        "Nödlösningssoppa",
        "Spontan stekpannefest",
        "Våghalsig vardagsröra",
        "Kreativ katastrofgryta",
        "Överraskningslåda från skafferiet",
        "Total smakroulette",
        "Matlådelotto",
        "Oplanerad söndagsmiddag",
        "Kaos i kastrullen",
        "Improviserad lyxgryta",
        "Sista-minuten-middag",
        "Restfest Royale",
        "Fullständig smakexplosion",
        "Högoddsarmiddag",
        "Skapelse från ingenstans",
        "Halvseriös helggryta",
        "Matlagning på känn",
        "Vild chansningsgryta",
        "Kreativ kylskåpsrensning",
        "Absurd aftonmiddag",
        "Kokkonst utan manual",
        "Inre-kockens-uppror",
        "Kaotisk bjudrätt",
        "Improviserad mästerkocksdröm",
        "Det stora smakexperimentet",
        "Husmorsknep på steroider",
        "Logiklöst långkok",
        "Osorterad smakbuffé",
        "Friformsgryta",
        "Receptlös festanrättning",
        "Magkänsle-middag",
        "Kulinariskt lyckokast",
        "Total improvisationsbuffé",
    ])
}

fn default_styles() -> Vec<String> {
    to_strings(&[
        "à la Recept Roulette",
        "med oväntad twist",
        "som ingen bad om",
        "för modiga gäster",
        "deluxe",
        "med fullständig smakrisk",
        "enligt principen 'det löser sig'",
        "för den äventyrlige hemmakocken",
        "med tveksam elegans",
        "med tveksamt självförtroende",
        "inspirerad av kylskåpets innehåll",
        "utan säkerhetsbälte",
        "direkt ur fantasin",
        "med maximal improvisation",
        "som utmanar alla matkoder",
        "som förvirrar men imponerar",
        "för dig som gillar överraskningar",
        "utan några som helst garantier",
        "för modiga smaklökar",
        "med oväntade kombinationer",
        "som chockar både värd och gäst",
        "i komplett kaosutförande",
        "som får grannarna att undra",
        "i semi-professionell tappning",
        "som borde ha testats på mindre publik",
        "med hög experimentfaktor",
        "för avancerad spontankockning",
        "med tveksam vetenskaplig grund",
        "som smakar bättre än den låter",
        "som låter värre än den smakar",
        "för dig som litar på ödet",
        "i kreativ panikstil",
        "som uppfanns i sista stund",
        "för den tidsoptimistiske kocken",
        "med fullständig receptfrihet",
        "som kan bli en klassiker eller katastrof",
        "för dig som gillar mat med historia, men utan recept",
        "som i teorin borde fungera",
        "som bevis på ren matgalenskap",
    ])
}

fn default_step_templates() -> Vec<String> {
    to_strings(&[
        "Stek **{ingredient}** i {minutes} minuter på medelvärme tills det ser någorlunda ätbart ut.",
        "Koka **{ingredient}** försiktigt i {minutes} minuter. Sluta när du börjar bli orolig.",
        "Riv **{ingredient}** till fina strimlor i {minutes} minuter och låtsas att det var planerat från början.",
        "Tärna **{ingredient}** i slumpmässiga storlekar i {minutes} minuter och kalla det 'rustikt'.",
        "Bryn **{ingredient}** i {minutes} minuter och häv sedan allt i en kastrull som om du vet vad du gör.",
        "Blanda **{ingredient}** med allt annat i {minutes} minuter och säg högt att detta är 'hemligt familjerecept'.",
        "Grilla **{ingredient}** i {minutes} minuter tills den ser socialt acceptabel ut på bild.",
        "Finputsa **{ingredient}** i {minutes} minuter och arrangera på tallriken som om du ska få en stjärna i någon guide.",
    ])
}

fn default_closing_remarks() -> Vec<String> {
    to_strings(&[
        "Avsluta med att smaka av. Om det är gott: häv ur dig att det var busenkelt. \
         Om det inte är gott: kalla det 'konceptuellt'.",
        "Servera direkt. Låtsas att just denna kombination är trendig i någon storstad.",
        "Toppa allt med valfri livskris och servera med ett självsäkert leende.",
    ])
}

impl RouletteConfig {
    /// Load configuration from the default file and environment variables
    ///
    /// See [`load_config`] for the lookup order.
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECEPT_ROULETTE__ prefix
/// 2. The given file, or recept-roulette.toml in the current directory
/// 3. Default values
///
/// Environment variable format: RECEPT_ROULETTE__CATALOG__PATH
pub fn load_config(path: Option<&Path>) -> Result<RouletteConfig, ConfigError> {
    let file = match path {
        // An explicitly named file must exist
        Some(path) => File::from(path).required(true),
        None => File::with_name("recept-roulette").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("RECEPT_ROULETTE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        assert_eq!(default_ingredient_count(), 4);
        assert_eq!(default_cook_time_min(), 3);
        assert_eq!(default_cook_time_max(), 12);
        assert_eq!(default_portions(), vec![1, 2, 3, 4]);
        assert_eq!(default_column(), "Livsmedelsnamn");
        assert_eq!(default_header_row(), 2);
        assert_eq!(
            default_catalog_path(),
            PathBuf::from("LivsmedelsDB_202511142228.xlsx")
        );
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        // No recept-roulette.toml lives in the crate root
        let config = RouletteConfig::load().unwrap();
        assert_eq!(config.ingredient_count, 4);
        assert_eq!(config.catalog.column, "Livsmedelsnamn");
        assert_eq!(config.phrases.portions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_default_tables_are_populated() {
        let phrases = PhrasesConfig::default();
        assert_eq!(phrases.base_names.len(), 40);
        assert_eq!(phrases.styles.len(), 39);
        assert_eq!(phrases.step_templates.len(), 8);
        assert_eq!(phrases.closing_remarks.len(), 3);
    }

    #[test]
    fn test_default_templates_use_both_placeholders() {
        for template in default_step_templates() {
            assert!(template.contains("{ingredient}"), "{}", template);
            assert!(template.contains("{minutes}"), "{}", template);
        }
    }

    #[test]
    fn test_load_config_from_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
ingredient_count = 6
seed = 42

[phrases]
base_names = ["Gryta"]
styles = ["deluxe"]
portions = [2, 8]

[catalog]
path = "mat.txt"
"#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.ingredient_count, 6);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.phrases.base_names, vec!["Gryta".to_string()]);
        assert_eq!(config.phrases.portions, vec![2, 8]);
        // Unspecified tables fall back to defaults
        assert_eq!(config.phrases.closing_remarks.len(), 3);
        assert_eq!(config.catalog.path, PathBuf::from("mat.txt"));
        assert_eq!(config.catalog.column, "Livsmedelsnamn");
    }

    #[test]
    fn test_load_config_missing_explicit_file_fails() {
        let result = load_config(Some(Path::new("/definitely/not/here.toml")));
        assert!(result.is_err());
    }
}
