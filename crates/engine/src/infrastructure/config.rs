//! Application configuration

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use pictureroom_domain::{Direction, DomainError, RoomMetadata};
use serde::Deserialize;

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface the server binds to
    pub server_host: String,
    /// WebSocket/HTTP server port
    pub server_port: u16,
    /// Path of the room's WebSocket endpoint
    pub room_path: String,
    /// Optional JSON file replacing the built-in room metadata
    pub room_config_path: Option<PathBuf>,
    /// Optional directory of `<item>.txt` picture descriptions
    pub descriptions_dir: Option<PathBuf>,
    /// WebSocket URL advertised to the room directory
    pub endpoint_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_host = var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let server_port = var("SERVER_PORT")
            .or_else(|| var("PORT"))
            .unwrap_or_else(|| "9080".to_string())
            .parse()
            .context("SERVER_PORT must be a valid port number")?;

        let mut room_path = var("ROOM_PATH").unwrap_or_else(|| "/rooms/pictureRoom".to_string());
        if !room_path.starts_with('/') {
            room_path.insert(0, '/');
        }

        let endpoint_url = var("ROOM_ENDPOINT_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("ws://{server_host}:{server_port}{room_path}"));

        Ok(Self {
            server_host,
            server_port,
            room_path,
            room_config_path: non_empty_path(var("ROOM_CONFIG_PATH")),
            descriptions_dir: non_empty_path(var("DESCRIPTIONS_DIR")),
            endpoint_url,
        })
    }

    /// Room metadata from `ROOM_CONFIG_PATH`, or the picture gallery.
    pub fn load_room(&self) -> Result<RoomMetadata> {
        match &self.room_config_path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read room config {}", path.display()))?;
                parse_room(&text)
                    .with_context(|| format!("invalid room config {}", path.display()))
            }
            None => Ok(picture_room()?),
        }
    }
}

fn non_empty_path(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoomFile {
    name: String,
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    description: String,
    exits: HashMap<String, String>,
    #[serde(default)]
    objects: Vec<String>,
}

fn parse_room(text: &str) -> Result<RoomMetadata> {
    let file: RoomFile = serde_json::from_str(text).context("room config is not valid JSON")?;
    if file.exits.len() != Direction::ALL.len() {
        anyhow::bail!(
            "room config must describe exactly {} exits, found {}",
            Direction::ALL.len(),
            file.exits.len()
        );
    }

    let exits = file
        .exits
        .into_iter()
        .map(|(code, text)| Ok((Direction::from_str(&code)?, text)))
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(RoomMetadata::new(
        file.name,
        file.full_name,
        file.description,
        exits,
        file.objects,
    )?)
}

/// The gallery room served when no room config is supplied.
pub fn picture_room() -> Result<RoomMetadata, DomainError> {
    let exits = [
        (Direction::North, "A Large doorway to the north"),
        (Direction::South, "A winding path leading off to the south"),
        (Direction::East, "An overgrown road, covered in brambles"),
        (Direction::West, "A shiny metal door, with a bright red handle"),
        (
            Direction::Up,
            "A spiral set of stairs, leading upward into the ceiling",
        ),
        (Direction::Down, "A tunnel, leading down into the earth"),
    ];

    RoomMetadata::new(
        "PictureRoom",
        "A gallery of pictures",
        "There are a number of pictures on the wall, in fact it looks like a Rogue's Gallery \
         - or could this be the GameOn! team ... ?",
        exits.map(|(direction, text)| (direction, text.to_string())),
        ["Masterpiece", "Scribble", "Sketch", "Mugshot", "Portrait"]
            .map(String::from)
            .to_vec(),
    )
}
