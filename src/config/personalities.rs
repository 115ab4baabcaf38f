//! Personality manifest loading and validation.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading a personality manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse manifest file: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Manifest does not define personality {0}")]
    MissingPersonality(PersonalityKey),
}

/// The four response personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonalityKey {
    Commander,
    Sage,
    Disruptor,
    Neutral,
}

impl PersonalityKey {
    /// All personalities, in table order.
    pub const ALL: [Self; 4] = [Self::Commander, Self::Sage, Self::Disruptor, Self::Neutral];

    /// Returns the upper-case name used in manifests and replies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commander => "COMMANDER",
            Self::Sage => "SAGE",
            Self::Disruptor => "DISRUPTOR",
            Self::Neutral => "NEUTRAL",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Commander => 0,
            Self::Sage => 1,
            Self::Disruptor => 2,
            Self::Neutral => 3,
        }
    }
}

impl fmt::Display for PersonalityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static display attributes of a personality.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PersonalityRecord {
    /// Archetype label (e.g. "Dominant").
    pub archetype: String,

    /// Tone label (e.g. "firm").
    pub tone: String,

    /// Emoji shown in front of every reply.
    pub emoji: String,

    /// Phrase shown when the personality takes over on `/start`.
    pub activation_phrase: String,

    /// Operating-style label interpolated into generic replies.
    pub operating_style: String,
}

impl PersonalityRecord {
    #[must_use]
    pub fn new(
        archetype: &str,
        tone: &str,
        emoji: &str,
        activation_phrase: &str,
        operating_style: &str,
    ) -> Self {
        Self {
            archetype: archetype.to_owned(),
            tone: tone.to_owned(),
            emoji: emoji.to_owned(),
            activation_phrase: activation_phrase.to_owned(),
            operating_style: operating_style.to_owned(),
        }
    }

    /// Names of the attributes that are empty.
    #[must_use]
    pub fn empty_fields(&self) -> Vec<&'static str> {
        [
            ("archetype", &self.archetype),
            ("tone", &self.tone),
            ("emoji", &self.emoji),
            ("activation_phrase", &self.activation_phrase),
            ("operating_style", &self.operating_style),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// The complete, immutable set of four personalities.
///
/// A table always holds a record for every [`PersonalityKey`]; a manifest
/// that leaves one out is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalityTable {
    records: [PersonalityRecord; 4],
}

impl PersonalityTable {
    /// Loads the table from a JSON manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, cannot be parsed, or
    /// does not define all four personalities.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses the table from a JSON manifest document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or incomplete.
    pub fn from_json(content: &str) -> Result<Self, ManifestError> {
        let map: BTreeMap<PersonalityKey, PersonalityRecord> = serde_json::from_str(content)?;
        Self::try_from(map)
    }

    /// Loads the table from a manifest, falling back to the built-in
    /// personalities if the manifest is missing or invalid.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(table) => {
                info!("Loaded personality manifest from {}", path.display());
                table
            }
            Err(e) => {
                warn!(
                    "Could not load {}, using default personalities: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Saves the table to a JSON manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ManifestError> {
        let content = serde_json::to_string_pretty(&self.to_map())?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the record for a personality.
    #[must_use]
    pub fn get(&self, key: PersonalityKey) -> &PersonalityRecord {
        &self.records[key.index()]
    }

    /// Iterates over all personalities in table order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonalityKey, &PersonalityRecord)> {
        PersonalityKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    fn to_map(&self) -> BTreeMap<PersonalityKey, &PersonalityRecord> {
        self.iter().collect()
    }
}

impl TryFrom<BTreeMap<PersonalityKey, PersonalityRecord>> for PersonalityTable {
    type Error = ManifestError;

    fn try_from(mut map: BTreeMap<PersonalityKey, PersonalityRecord>) -> Result<Self, Self::Error> {
        let mut take = |key: PersonalityKey| {
            map.remove(&key)
                .ok_or(ManifestError::MissingPersonality(key))
        };
        Ok(Self {
            records: [
                take(PersonalityKey::Commander)?,
                take(PersonalityKey::Sage)?,
                take(PersonalityKey::Disruptor)?,
                take(PersonalityKey::Neutral)?,
            ],
        })
    }
}

impl Default for PersonalityTable {
    fn default() -> Self {
        Self {
            records: [
                PersonalityRecord::new("Dominant", "firm", "🔥", "🔥 COMMANDER", "Control"),
                PersonalityRecord::new("Sage", "serene", "🧠", "🧠 SAGE", "Analysis"),
                PersonalityRecord::new(
                    "Disruptive",
                    "irreverent",
                    "🌱",
                    "🌱 DISRUPTOR",
                    "Innovation",
                ),
                PersonalityRecord::new("Neutral", "objective", "⚪", "⚪ NEUTRAL", "Balance"),
            ],
        }
    }
}
