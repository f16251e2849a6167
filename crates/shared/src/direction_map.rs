//! Serde helpers for direction-keyed maps.
//!
//! Keys are written in compass order (`n, s, e, w, u, d`), which a
//! string-keyed map would lose. Reading accepts either case.

use std::collections::BTreeMap;
use std::str::FromStr;

use pictureroom_domain::Direction;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

pub type DirectionMap = BTreeMap<Direction, String>;

/// Upper-case keys, as shown to players in location events.
pub fn serialize_upper<S: Serializer>(
    map: &DirectionMap,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(map.iter().map(|(d, text)| (d.display_code(), text)))
}

/// Lower-case keys, as advertised to the directory.
pub fn serialize_lower<S: Serializer>(
    map: &DirectionMap,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(map.iter().map(|(d, text)| (d.code(), text)))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DirectionMap, D::Error> {
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(code, text)| {
            Direction::from_str(&code)
                .map(|direction| (direction, text))
                .map_err(D::Error::custom)
        })
        .collect()
}
