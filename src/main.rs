use clap::{Parser, ValueEnum};
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

use recept_roulette::{
    catalog, load_config, PhraseBook, RecipeRoulette, RouletteConfig, RouletteError,
};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    /// Markdown recipe card
    #[default]
    Markdown,
    /// Recipe as JSON
    Json,
}

/// Slumpa fram oväntade kombinationer från Livsmedelsverkets databas
/// och få ett humoristiskt receptförslag.
#[derive(Debug, Parser)]
#[command(name = "recept-roulette", version, about)]
struct Args {
    /// Number of ingredients to draw
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Ingredient catalog (.xlsx/.ods workbook, .csv/.tsv table export, .txt or .json)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Column holding the food names
    #[arg(long)]
    column: Option<String>,

    /// Zero-based row holding the column names
    #[arg(long)]
    header_row: Option<usize>,

    /// Field delimiter of the table export
    #[arg(long)]
    delimiter: Option<char>,

    /// Configuration file (defaults to ./recept-roulette.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible recipes
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("{}", user_message(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match args.config.as_deref() {
        Some(path) => load_config(Some(path))?,
        None => RouletteConfig::load()?,
    };
    if let Some(path) = args.catalog {
        config.catalog.path = path;
    }
    if let Some(column) = args.column {
        config.catalog.column = column;
    }
    if let Some(row) = args.header_row {
        config.catalog.header_row = row;
    }
    if let Some(delimiter) = args.delimiter {
        config.catalog.delimiter = delimiter;
    }
    debug!("{:#?}", config);

    let phrases = PhraseBook::from_config(&config.phrases)?;
    let provider = catalog::open(&config.catalog.path, &config.catalog);

    let mut builder = RecipeRoulette::builder()
        .phrases(phrases)
        .boxed_provider(provider);
    if let Some(seed) = args.seed.or(config.seed) {
        builder = builder.seed(seed);
    }
    let roulette = builder.build()?;

    if roulette.pool().is_empty() {
        return Err("Databasen innehåller inga livsmedel efter filtrering. \
                    Kontrollera kolumnnamn och header-rad."
            .into());
    }

    let recipe = roulette.generate(args.count.unwrap_or(config.ingredient_count))?;
    match args.format {
        Format::Markdown => print!("{}", recipe.to_markdown()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&recipe)?),
    }

    Ok(())
}

/// Turn catalog failures into the messages a user can act on
fn user_message(e: &(dyn std::error::Error + 'static)) -> String {
    match e.downcast_ref::<RouletteError>() {
        Some(RouletteError::CatalogIo { path, source })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            format!(
                "Filen '{}' hittades inte. Kontrollera att sökvägen stämmer.",
                path.display()
            )
        }
        Some(RouletteError::CatalogIo { .. })
        | Some(RouletteError::CatalogFormat(_))
        | Some(RouletteError::CatalogColumnMissing { .. })
        | Some(RouletteError::JsonError(_)) => {
            format!("Ett fel uppstod vid inläsning av filen: {}", e)
        }
        _ => e.to_string(),
    }
}
