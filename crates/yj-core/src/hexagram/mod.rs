//! The hexagram table and trigram decomposition.
//!
//! The table is static data. Lookups go through a key index that is built
//! once on first use and shared read-only afterwards.

pub mod table;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{DivinationError, DivinationResult};
use crate::lines::{LineSequence, key_to_lines};

pub use table::HEXAGRAMS;

/// One of the 64 hexagrams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hexagram {
    index: u8,
    key: &'static str,
    name: &'static str,
    judgment: &'static str,
    image: &'static str,
}

impl Hexagram {
    /// Traditional ordinal (1-64).
    pub fn index(&self) -> u8 {
        self.index
    }

    /// The six-character `0`/`1` line key.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Display name, e.g. `乾为天`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The judgment text (卦辞).
    pub fn judgment(&self) -> &'static str {
        self.judgment
    }

    /// The image commentary (象曰).
    pub fn image(&self) -> &'static str {
        self.image
    }

    /// The six lines of this hexagram.
    pub fn lines(&self) -> LineSequence {
        key_to_lines(self.key).unwrap_or_else(|| unreachable!("table key {} is malformed", self.key))
    }

    /// Upper trigram, from the first three key characters.
    pub fn upper_trigram(&self) -> Trigram {
        Trigram::from_bits(&self.key[..3])
            .unwrap_or_else(|| unreachable!("table key {} is malformed", self.key))
    }

    /// Lower trigram, from the last three key characters.
    pub fn lower_trigram(&self) -> Trigram {
        Trigram::from_bits(&self.key[3..])
            .unwrap_or_else(|| unreachable!("table key {} is malformed", self.key))
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Index {})", self.name, self.index)
    }
}

static BY_KEY: Lazy<HashMap<&'static str, &'static Hexagram>> =
    Lazy::new(|| HEXAGRAMS.iter().map(|h| (h.key, h)).collect());

/// Look up a hexagram by its line key.
pub fn lookup(key: &str) -> DivinationResult<&'static Hexagram> {
    BY_KEY
        .get(key)
        .copied()
        .ok_or_else(|| DivinationError::UnknownHexagram(key.to_string()))
}

/// Look up a hexagram by its traditional index (1-64).
pub fn by_index(index: u8) -> Option<&'static Hexagram> {
    let slot = usize::from(index).checked_sub(1)?;
    HEXAGRAMS.get(slot)
}

/// All hexagrams in index order.
pub fn all() -> &'static [Hexagram] {
    &HEXAGRAMS
}

/// One of the eight three-line figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Trigram {
    /// 乾, heaven.
    Qian,
    /// 坤, earth.
    Kun,
    /// 坎, water.
    Kan,
    /// 离, fire.
    Li,
    /// 震, thunder.
    Zhen,
    /// 巽, wind.
    Xun,
    /// 艮, mountain.
    Gen,
    /// 兑, lake.
    Dui,
}

impl Trigram {
    /// Parse a three-character `0`/`1` key.
    pub fn from_bits(bits: &str) -> Option<Self> {
        match bits {
            "111" => Some(Self::Qian),
            "000" => Some(Self::Kun),
            "010" => Some(Self::Kan),
            "101" => Some(Self::Li),
            "001" => Some(Self::Zhen),
            "110" => Some(Self::Xun),
            "011" => Some(Self::Gen),
            "100" => Some(Self::Dui),
            _ => None,
        }
    }

    /// Chinese name, e.g. `乾`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Kun => "坤",
            Self::Kan => "坎",
            Self::Li => "离",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Gen => "艮",
            Self::Dui => "兑",
        }
    }

    /// The natural image, e.g. `天`.
    pub fn image(self) -> &'static str {
        match self {
            Self::Qian => "天",
            Self::Kun => "地",
            Self::Kan => "水",
            Self::Li => "火",
            Self::Zhen => "雷",
            Self::Xun => "风",
            Self::Gen => "山",
            Self::Dui => "泽",
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.image())
    }
}
