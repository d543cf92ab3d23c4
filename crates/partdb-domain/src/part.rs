//! Part module - an entry of the parts inventory

use crate::AdvancedProperties;
use std::fmt;

/// Unique identifier for a part based on UUIDv7
///
/// UUIDv7 keeps identifiers chronologically sortable and needs no
/// coordination between writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartId(u128);

impl PartId {
    /// Generate a new UUIDv7-based PartId
    ///
    /// # Examples
    ///
    /// ```
    /// use partdb_domain::PartId;
    ///
    /// let id = PartId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a PartId from a raw u128 value (storage layer)
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a PartId from its UUID string form
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid part id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for PartId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A part record
///
/// Only the fields relevant to this layer are modelled: an identity, a
/// name and the [`AdvancedProperties`] group.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// Unique identifier
    pub id: PartId,

    /// Human readable name
    pub name: String,

    advanced: AdvancedProperties,
}

impl Part {
    /// Create a new part with a fresh id and default advanced properties
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(PartId::new(), name)
    }

    /// Create a part with a known id
    pub fn with_id(id: PartId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            advanced: AdvancedProperties::default(),
        }
    }

    /// Advanced properties (review flag, tags, mass)
    pub fn advanced(&self) -> &AdvancedProperties {
        &self.advanced
    }

    /// Mutable access to the advanced properties
    pub fn advanced_mut(&mut self) -> &mut AdvancedProperties {
        &mut self.advanced
    }

    /// Shortcut for `advanced().needs_review()`
    pub fn needs_review(&self) -> bool {
        self.advanced.needs_review()
    }

    /// Shortcut for `advanced().tags()`
    pub fn tags(&self) -> &str {
        self.advanced.tags()
    }

    /// Shortcut for `advanced().mass()`
    pub fn mass(&self) -> Option<f64> {
        self.advanced.mass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_part_defaults() {
        let part = Part::new("10k resistor");
        assert_eq!(part.name, "10k resistor");
        assert!(!part.needs_review());
        assert_eq!(part.tags(), "");
        assert_eq!(part.mass(), None);
    }

    #[test]
    fn test_advanced_mut() {
        let mut part = Part::new("LED");
        part.advanced_mut()
            .set_tags("a,b,c")
            .set_mass(Some(0.3))
            .set_needs_review(true);

        assert_eq!(part.tags(), "a,b,c");
        assert_eq!(part.mass(), Some(0.3));
        assert!(part.needs_review());
    }

    #[test]
    fn test_part_id_display_and_parse() {
        let id = PartId::new();
        let id_str = id.to_string();
        assert_eq!(id_str.len(), 36);

        let parsed = PartId::from_string(&id_str).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_part_id_invalid_string() {
        assert!(PartId::from_string("not-a-part-id").is_err());
        assert!(PartId::from_string("").is_err());
    }

    #[test]
    fn test_part_id_chronological() {
        let id1 = PartId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = PartId::new();
        assert!(id1 < id2, "Earlier UUIDv7 should sort first");
    }
}
