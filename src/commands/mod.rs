use anyhow::Result;
use tracing::info;

use feeding_plan::FeedingDataset;
use feeding_plan::dataset::EMBEDDED_DOCUMENT;

use crate::cli::SourceArgs;
use crate::util::{read_document, sha256_text};

pub mod export;
pub mod rules;
pub mod summary;
pub mod validate;

pub struct LoadedDataset {
    pub source: String,
    pub source_sha256: String,
    pub dataset: FeedingDataset,
}

pub fn load_dataset(args: &SourceArgs) -> Result<LoadedDataset> {
    let (source, text) = match &args.input {
        Some(path) => (path.display().to_string(), read_document(path)?),
        None => ("embedded".to_string(), EMBEDDED_DOCUMENT.to_string()),
    };

    info!(source = %source, bytes = text.len(), "loading feeding plan document");

    let dataset = FeedingDataset::build(&text)?;
    Ok(LoadedDataset {
        source_sha256: sha256_text(&text),
        source,
        dataset,
    })
}
