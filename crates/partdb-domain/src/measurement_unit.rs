//! Measurement unit module - how amounts of a part are measured

/// A measurement unit descriptor
///
/// Consumed read-only by the form layer to decide whether a value is shown
/// with an SI prefix, whether it must be integral and which symbol to show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MeasurementUnit {
    /// Name of the unit (e.g. "Ohm")
    pub name: String,

    /// Display symbol (e.g. "Ω"), `None` for unit-less counts
    pub unit: Option<String>,

    /// Amounts in this unit must be whole numbers
    pub is_integer: bool,

    /// Values in this unit are displayed with an SI prefix
    pub use_si_prefix: bool,
}

impl MeasurementUnit {
    /// Create a unit with a display symbol
    pub fn new(name: impl Into<String>, unit: Option<String>) -> Self {
        Self {
            name: name.into(),
            unit,
            is_integer: false,
            use_si_prefix: false,
        }
    }

    /// Builder-style setter for the integer flag
    pub fn integer(mut self, is_integer: bool) -> Self {
        self.is_integer = is_integer;
        self
    }

    /// Builder-style setter for the SI prefix flag
    pub fn si_prefix(mut self, use_si_prefix: bool) -> Self {
        self.use_si_prefix = use_si_prefix;
        self
    }

    /// Whether values use an SI prefix
    pub fn is_use_si_prefix(&self) -> bool {
        self.use_si_prefix
    }

    /// Whether values must be integral
    pub fn is_integer(&self) -> bool {
        self.is_integer
    }

    /// The display symbol, if any
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_flags() {
        let ohm = MeasurementUnit::new("Ohm", Some("Ω".to_string())).si_prefix(true);
        assert!(ohm.is_use_si_prefix());
        assert!(!ohm.is_integer());
        assert_eq!(ohm.unit(), Some("Ω"));
    }

    #[test]
    fn test_unitless_pieces() {
        let pieces = MeasurementUnit::new("Pieces", None).integer(true);
        assert!(pieces.is_integer());
        assert!(!pieces.is_use_si_prefix());
        assert_eq!(pieces.unit(), None);
    }
}
