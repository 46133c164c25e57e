use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

pub mod catalog;
pub mod fragments;
pub mod sampler;
pub mod template;

pub use catalog::{BaseWeapon, Catalog};
pub use fragments::{substitute, IndexSource};
pub use sampler::{sample, sample_many, GeneratedWeapon};
pub use template::{render, render_all};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSettings {
    pub catalog_path: PathBuf,
    pub template_path: PathBuf,
    pub weapon_count: usize,
    pub perk_count: usize,
    /// Drawn at random when absent.
    pub seed: Option<u64>,
    /// Stdout when absent.
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog decode error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog contains no weapons")]
    EmptyCatalog,
    #[error("fragment key {key:?} appears in text but has no options")]
    EmptyFragment { key: String },
    #[error("fragment key {key:?} kept expanding past {max} replacements", max = fragments::MAX_REPLACEMENTS)]
    FragmentRecursion { key: String },
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Samples `weapon_count` weapons and renders them all into one string.
pub fn generate<S: IndexSource + ?Sized>(
    catalog: &Catalog,
    template: &str,
    weapon_count: usize,
    perk_count: usize,
    rng: &mut S,
) -> Result<String> {
    let weapons = sample_many(catalog, perk_count, weapon_count, rng)?;
    Ok(render_all(template, &weapons))
}

pub fn run(settings: GeneratorSettings) -> Result<()> {
    if !settings.catalog_path.is_file() {
        return Err(GeneratorError::Config(format!(
            "Catalog file does not exist: {}",
            settings.catalog_path.display()
        )));
    }
    if !settings.template_path.is_file() {
        return Err(GeneratorError::Config(format!(
            "Template file does not exist: {}",
            settings.template_path.display()
        )));
    }

    let catalog = Catalog::load(&settings.catalog_path)?;
    let template = fs::read_to_string(&settings.template_path)?;

    let seed = settings.seed.unwrap_or_else(rand::random::<u64>);
    tracing::info!("Weapon generator seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let output = generate(
        &catalog,
        &template,
        settings.weapon_count,
        settings.perk_count,
        &mut rng,
    )?;

    match &settings.output_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, &output)?;
            tracing::info!(
                "Wrote {} weapons to {}",
                settings.weapon_count,
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(output.as_bytes())?;
            handle.flush()?;
        }
    }

    Ok(())
}
