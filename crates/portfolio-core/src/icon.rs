//! Icons referenced by name from content records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of icons content may name.
///
/// Unknown or missing names resolve to [`IconKind::Code2`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconKind {
    #[default]
    Code2,
    Smartphone,
    Server,
    Wrench,
    Layers,
    ShieldCheck,
    Rocket,
}

impl IconKind {
    pub const ALL: [IconKind; 7] = [
        IconKind::Code2,
        IconKind::Smartphone,
        IconKind::Server,
        IconKind::Wrench,
        IconKind::Layers,
        IconKind::ShieldCheck,
        IconKind::Rocket,
    ];

    /// Case-insensitive lookup with the default fallback
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconKind::Code2 => "Code2",
            IconKind::Smartphone => "Smartphone",
            IconKind::Server => "Server",
            IconKind::Wrench => "Wrench",
            IconKind::Layers => "Layers",
            IconKind::ShieldCheck => "ShieldCheck",
            IconKind::Rocket => "Rocket",
        }
    }
}

impl From<String> for IconKind {
    fn from(name: String) -> Self {
        IconKind::from_name(&name)
    }
}

impl From<IconKind> for String {
    fn from(kind: IconKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(IconKind::from_name("shieldcheck"), IconKind::ShieldCheck);
        assert_eq!(IconKind::from_name("ROCKET"), IconKind::Rocket);
        assert_eq!(IconKind::from_name(" Layers "), IconKind::Layers);
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(IconKind::from_name("Database"), IconKind::Code2);
        assert_eq!(IconKind::from_name(""), IconKind::Code2);
    }

    #[test]
    fn test_serde_uses_names() {
        let kind: IconKind = serde_json::from_str("\"server\"").unwrap();
        assert_eq!(kind, IconKind::Server);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"Server\"");
    }
}
