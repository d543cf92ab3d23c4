//! SI prefix module - power-of-ten multipliers for displayed values

/// SI prefix offered when editing a scaled value
///
/// Only the five prefixes used by the part editor are modelled:
/// - Mega: 10^6
/// - Kilo: 10^3
/// - None: 10^0
/// - Milli: 10^-3
/// - Micro: 10^-6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SiPrefix {
    /// 10^6
    Mega,

    /// 10^3
    Kilo,

    /// No prefix
    #[default]
    None,

    /// 10^-3
    Milli,

    /// 10^-6
    Micro,
}

impl SiPrefix {
    /// All prefixes, largest first
    pub const ALL: [SiPrefix; 5] = [
        SiPrefix::Mega,
        SiPrefix::Kilo,
        SiPrefix::None,
        SiPrefix::Milli,
        SiPrefix::Micro,
    ];

    /// Power of ten this prefix stands for
    pub fn exponent(&self) -> i32 {
        match self {
            SiPrefix::Mega => 6,
            SiPrefix::Kilo => 3,
            SiPrefix::None => 0,
            SiPrefix::Milli => -3,
            SiPrefix::Micro => -6,
        }
    }

    /// Display symbol (empty for no prefix)
    pub fn symbol(&self) -> &'static str {
        match self {
            SiPrefix::Mega => "M",
            SiPrefix::Kilo => "k",
            SiPrefix::None => "",
            SiPrefix::Milli => "m",
            SiPrefix::Micro => "µ",
        }
    }

    /// Lowercase name of the prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            SiPrefix::Mega => "mega",
            SiPrefix::Kilo => "kilo",
            SiPrefix::None => "none",
            SiPrefix::Milli => "milli",
            SiPrefix::Micro => "micro",
        }
    }

    /// Look up the prefix for an exponent
    ///
    /// # Examples
    ///
    /// ```
    /// use partdb_domain::SiPrefix;
    ///
    /// assert_eq!(SiPrefix::from_exponent(3), Some(SiPrefix::Kilo));
    /// assert_eq!(SiPrefix::from_exponent(9), None);
    /// ```
    pub fn from_exponent(exponent: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.exponent() == exponent)
    }

    /// Parse a prefix symbol
    ///
    /// Case sensitive, since `M` and `m` differ. `u` and the Greek mu are
    /// accepted for micro next to the micro sign.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "M" => Some(SiPrefix::Mega),
            "k" => Some(SiPrefix::Kilo),
            "" => Some(SiPrefix::None),
            "m" => Some(SiPrefix::Milli),
            "µ" | "μ" | "u" => Some(SiPrefix::Micro),
            _ => None,
        }
    }

    /// Parse a prefix from a symbol, an exponent or a name
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(prefix) = Self::from_symbol(s) {
            return Some(prefix);
        }
        if let Ok(exponent) = s.parse::<i32>() {
            return Self::from_exponent(exponent);
        }
        match s.to_lowercase().as_str() {
            "mega" => Some(SiPrefix::Mega),
            "kilo" => Some(SiPrefix::Kilo),
            "none" => Some(SiPrefix::None),
            "milli" => Some(SiPrefix::Milli),
            "micro" => Some(SiPrefix::Micro),
            _ => None,
        }
    }

    /// Next larger prefix
    pub fn larger(&self) -> Option<Self> {
        match self {
            SiPrefix::Mega => None,
            SiPrefix::Kilo => Some(SiPrefix::Mega),
            SiPrefix::None => Some(SiPrefix::Kilo),
            SiPrefix::Milli => Some(SiPrefix::None),
            SiPrefix::Micro => Some(SiPrefix::Milli),
        }
    }
}

impl std::fmt::Display for SiPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for SiPrefix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid SI prefix: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponent_roundtrip() {
        for prefix in SiPrefix::ALL {
            assert_eq!(SiPrefix::from_exponent(prefix.exponent()), Some(prefix));
        }
        assert_eq!(SiPrefix::from_exponent(1), None);
        assert_eq!(SiPrefix::from_exponent(-9), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(SiPrefix::from_symbol("M"), Some(SiPrefix::Mega));
        assert_eq!(SiPrefix::from_symbol("m"), Some(SiPrefix::Milli));
        assert_eq!(SiPrefix::from_symbol("µ"), Some(SiPrefix::Micro));
        assert_eq!(SiPrefix::from_symbol("μ"), Some(SiPrefix::Micro));
        assert_eq!(SiPrefix::from_symbol("u"), Some(SiPrefix::Micro));
        assert_eq!(SiPrefix::from_symbol("K"), None);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(SiPrefix::parse("k"), Some(SiPrefix::Kilo));
        assert_eq!(SiPrefix::parse("-3"), Some(SiPrefix::Milli));
        assert_eq!(SiPrefix::parse("Mega"), Some(SiPrefix::Mega));
        assert_eq!(SiPrefix::parse("4"), None);
        assert!("giga".parse::<SiPrefix>().is_err());
    }

    #[test]
    fn test_larger_prefix() {
        assert_eq!(SiPrefix::Micro.larger(), Some(SiPrefix::Milli));
        assert_eq!(SiPrefix::Mega.larger(), None);
        assert_eq!(SiPrefix::None.larger(), Some(SiPrefix::Kilo));
    }
}
