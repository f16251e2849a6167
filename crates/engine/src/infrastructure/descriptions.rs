//! Picture descriptions for `/examine`.
//!
//! The five gallery pictures ship with the binary. An optional directory of
//! `<item>.txt` files can add pictures or replace the shipped text.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use super::ports::{DescriptionError, DescriptionLookup};

/// Text shown when an item has no description.
pub const MISSING_DESCRIPTION: &str = "Oops, no picture description could be found.";

const BUILT_IN: [(&str, &str); 5] = [
    (
        "masterpiece",
        include_str!("../../assets/descriptions/masterpiece.txt"),
    ),
    (
        "scribble",
        include_str!("../../assets/descriptions/scribble.txt"),
    ),
    ("sketch", include_str!("../../assets/descriptions/sketch.txt")),
    ("mugshot", include_str!("../../assets/descriptions/mugshot.txt")),
    (
        "portrait",
        include_str!("../../assets/descriptions/portrait.txt"),
    ),
];

/// Description lookup backed by the shipped pack plus an optional directory.
pub struct PictureDescriptions {
    built_in: HashMap<&'static str, &'static str>,
    directory: Option<PathBuf>,
}

impl PictureDescriptions {
    /// Shipped descriptions only.
    pub fn new() -> Self {
        Self {
            built_in: BUILT_IN.into_iter().collect(),
            directory: None,
        }
    }

    /// Shipped descriptions, overridden by `<directory>/<item>.txt` when present.
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: Some(directory.into()),
            ..Self::new()
        }
    }
}

impl Default for PictureDescriptions {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DescriptionLookup for PictureDescriptions {
    async fn describe(&self, item: &str) -> Result<Option<String>, DescriptionError> {
        if !is_asset_name(item) {
            return Ok(None);
        }

        if let Some(directory) = &self.directory {
            let path = directory.join(format!("{item}.txt"));
            match tokio::fs::read_to_string(&path).await {
                Ok(text) => return Ok(Some(text)),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(source) => {
                    return Err(DescriptionError::Io {
                        item: item.to_string(),
                        source,
                    })
                }
            }
        }

        Ok(self.built_in.get(item).map(|text| text.to_string()))
    }
}

/// Item names map straight onto file names, so only plain names qualify.
fn is_asset_name(item: &str) -> bool {
    !item.is_empty()
        && item
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Looks up `item`, degrading to [`MISSING_DESCRIPTION`] on absence or failure.
pub async fn describe_or_fallback(lookup: &dyn DescriptionLookup, item: &str) -> String {
    match lookup.describe(item).await {
        Ok(Some(text)) => text,
        Ok(None) => MISSING_DESCRIPTION.to_string(),
        Err(e) => {
            tracing::warn!(item = %item, error = %e, "Error reading picture description");
            MISSING_DESCRIPTION.to_string()
        }
    }
}
