//! Advanced properties of a part, not related to a more specific group

/// Reusable group of persisted fields mixed into a [`Part`](crate::Part)
///
/// The setters perform no validation. A negative mass is stored as given;
/// rejecting it is the job of the validation layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdvancedProperties {
    needs_review: bool,
    tags: String,
    mass: Option<f64>,
}

impl AdvancedProperties {
    /// Create an empty property group (no review, no tags, unknown mass)
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this part is marked as needing further review
    /// (for example because it is work in progress)
    pub fn needs_review(&self) -> bool {
        self.needs_review
    }

    /// Set the "needs review" status
    pub fn set_needs_review(&mut self, needs_review: bool) -> &mut Self {
        self.needs_review = needs_review;
        self
    }

    /// Comma-separated list of tags, exactly as stored
    pub fn tags(&self) -> &str {
        &self.tags
    }

    /// Replace the comma-separated tag list
    ///
    /// The string is stored verbatim, empty strings included.
    ///
    /// # Examples
    ///
    /// ```
    /// use partdb_domain::AdvancedProperties;
    ///
    /// let mut props = AdvancedProperties::new();
    /// props.set_tags("smd, 0603,resistor");
    /// assert_eq!(props.tags(), "smd, 0603,resistor");
    /// ```
    pub fn set_tags(&mut self, tags: impl Into<String>) -> &mut Self {
        self.tags = tags.into();
        self
    }

    /// Iterate over the individual tags
    ///
    /// Entries are trimmed and empty entries are skipped. The stored string
    /// is left untouched.
    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }

    /// Mass of a single part unit in grams, `None` if unknown
    pub fn mass(&self) -> Option<f64> {
        self.mass
    }

    /// Set the mass of a single part unit in grams, `None` if unknown
    pub fn set_mass(&mut self, mass: Option<f64>) -> &mut Self {
        self.mass = mass;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let props = AdvancedProperties::new();
        assert!(!props.needs_review());
        assert_eq!(props.tags(), "");
        assert_eq!(props.mass(), None);
    }

    #[test]
    fn test_needs_review_toggle() {
        let mut props = AdvancedProperties::new();
        props.set_needs_review(true);
        assert!(props.needs_review());
        props.set_needs_review(false);
        assert!(!props.needs_review());
    }

    #[test]
    fn test_tags_not_normalized() {
        let mut props = AdvancedProperties::new();
        props.set_tags("a,b,c");
        assert_eq!(props.tags(), "a,b,c");

        props.set_tags(" a ,, b ");
        assert_eq!(props.tags(), " a ,, b ");

        props.set_tags("");
        assert_eq!(props.tags(), "");
    }

    #[test]
    fn test_tag_list() {
        let mut props = AdvancedProperties::new();
        props.set_tags(" smd ,,0805, resistor,");
        let tags: Vec<&str> = props.tag_list().collect();
        assert_eq!(tags, vec!["smd", "0805", "resistor"]);
    }

    #[test]
    fn test_mass_clear() {
        let mut props = AdvancedProperties::new();
        props.set_mass(Some(1.25));
        assert_eq!(props.mass(), Some(1.25));

        props.set_mass(None);
        assert_eq!(props.mass(), None);
    }

    #[test]
    fn test_negative_mass_is_stored() {
        // Rejection happens in the gatekeeper, not in the setter
        let mut props = AdvancedProperties::new();
        props.set_mass(Some(-3.0));
        assert_eq!(props.mass(), Some(-3.0));
    }

    #[test]
    fn test_chained_setters() {
        let mut props = AdvancedProperties::new();
        props
            .set_needs_review(true)
            .set_tags("capacitor")
            .set_mass(Some(0.02));

        assert!(props.needs_review());
        assert_eq!(props.tags(), "capacitor");
        assert_eq!(props.mass(), Some(0.02));
    }
}
