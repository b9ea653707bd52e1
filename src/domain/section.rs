//! Section identifiers and the per-run fragment map.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::AppError;

/// Identifier for one independently generated fragment of the final artifact.
///
/// Ordering is never derived from the id itself; the `PipelinePlan` owns both
/// the generation sequence and the assembly position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    /// Parse and validate a section identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, AppError> {
        let raw = raw.into();
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::InvalidSectionId(raw));
        }
        Ok(Self(raw))
    }

    /// Construct a known-good id used by the built-in plans.
    pub(crate) fn fixed(raw: &'static str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Insertion-ordered mapping from section id to sanitized fragment text.
///
/// Owned by a single pipeline run; on failure the map holds exactly the
/// sections processed before the abort and is dropped with the run.
#[derive(Debug, Clone, Default)]
pub struct PortfolioCode {
    entries: Vec<(SectionId, String)>,
}

impl PortfolioCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fragment, replacing any previous text for the same section.
    pub fn insert(&mut self, id: SectionId, text: String) {
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some(slot) => slot.1 = text,
            None => self.entries.push((id, text)),
        }
    }

    pub fn get(&self, id: &SectionId) -> Option<&str> {
        self.entries.iter().find(|(key, _)| key == id).map(|(_, text)| text.as_str())
    }

    pub fn contains(&self, id: &SectionId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SectionId, &str)> {
        self.entries.iter().map(|(id, text)| (id, text.as_str()))
    }
}

impl Serialize for PortfolioCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, text) in &self.entries {
            map.serialize_entry(id.as_str(), text)?;
        }
        map.end()
    }
}
