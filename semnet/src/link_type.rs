//! Relation kinds an edge can carry.
//!
//! The vocabulary is closed: seventeen kinds, each with a short code and a label. The
//! persisted and displayed form is `"(<code>) <label>"`, e.g. `(Gen) Генеративная связь`.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error when text does not name one of the seventeen link types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown link type: '{0}'")]
pub struct ParseLinkTypeError(pub String);

macro_rules! link_types {
    ($($variant:ident => ($code:literal, $label:literal)),+ $(,)?) => {
        /// Semantic relation classifying an edge.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum LinkType {
            #[default]
            $($variant),+
        }

        impl LinkType {
            /// Every link type, in the order offered to users.
            pub const ALL: [LinkType; 17] = [$(LinkType::$variant),+];

            /// Short code, e.g. `Gen`.
            pub const fn code(self) -> &'static str {
                match self {
                    $(LinkType::$variant => $code),+
                }
            }

            /// Human label without the code, e.g. `Генеративная связь`.
            pub const fn label(self) -> &'static str {
                match self {
                    $(LinkType::$variant => $label),+
                }
            }

            /// English variant name, e.g. `Generative`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(LinkType::$variant => stringify!($variant)),+
                }
            }

            /// Display and persisted form: `(code) label`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(LinkType::$variant => concat!("(", $code, ") ", $label)),+
                }
            }
        }
    };
}

link_types! {
    Generative => ("Gen", "Генеративная связь"),
    Destinative => ("Des", "Дестинативная связь"),
    Directive => ("Dir", "Директивная связь"),
    Instrumental => ("Ins", "Инструментальная связь"),
    Causal => ("Cous", "Каузальная связь"),
    Comitative => ("Com", "Комитативная связь"),
    Correlative => ("Cor", "Коррелятивная связь"),
    // Spelling matches data files written by earlier versions.
    Negative => ("Neg", "Негативаня связь"),
    Limitative => ("Lim", "Лимитативная связь"),
    Mediative => ("Med", "Медиативная связь"),
    Possessive => ("Pos", "Поссесивная связь"),
    Potential => ("Pot", "Потенсивная связь"),
    Resultative => ("Res", "Результативная связь"),
    Reproductive => ("Rep", "Репродуктивная связь"),
    Situative => ("Sit", "Ситуативная связь"),
    Transgressive => ("Trg", "Трансгрессивная связь"),
    Finitive => ("Fin", "Финитивная связь"),
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkType {
    type Err = ParseLinkTypeError;

    /// Accepts the full `(code) label` text, the bare code or the English name.
    /// Code and name matching ignores ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        LinkType::ALL
            .into_iter()
            .find(|t| {
                t.as_str() == s
                    || t.code().eq_ignore_ascii_case(s)
                    || t.name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| ParseLinkTypeError(s.to_string()))
    }
}

impl Serialize for LinkType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LinkType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
