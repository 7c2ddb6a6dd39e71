use serde::{Deserialize, Serialize};

use crate::{DEFAULT_MASK, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Slot {
    Digit,
    Letter,
    Alphanumeric,
}

impl Slot {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            '9' => Some(Self::Digit),
            'a' => Some(Self::Letter),
            '*' => Some(Self::Alphanumeric),
            _ => None,
        }
    }

    const fn accepts(self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::Letter => c.is_ascii_alphabetic(),
            Self::Alphanumeric => c.is_ascii_alphanumeric(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Part {
    Slot(Slot),
    Literal(char),
}

/// Input mask such as `99 / 99 / 9999`.
///
/// `9` is a digit slot, `a` a letter slot and `*` an alphanumeric slot;
/// every other character is a literal the mask inserts on its own. A mask
/// with no slots at all passes text through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{source}")]
pub struct InputMask {
    source: String,
    parts: Vec<Part>,
}

/// Result of pushing text through the mask.
struct Filled {
    masked: String,
    raw: String,
    slots_filled: usize,
}

impl InputMask {
    pub fn new(pattern: &str) -> Self {
        let parts = pattern
            .chars()
            .map(|c| Slot::from_char(c).map_or(Part::Literal(c), Part::Slot))
            .collect();
        Self {
            source: pattern.to_owned(),
            parts,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn slot_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| matches!(part, Part::Slot(_)))
            .count()
    }

    fn fill(&self, text: &str) -> Filled {
        if self.slot_count() == 0 {
            return Filled {
                masked: text.to_owned(),
                raw: text.to_owned(),
                slots_filled: 0,
            };
        }

        let mut input = text.chars();
        let mut filled = Filled {
            masked: String::with_capacity(self.source.len()),
            raw: String::new(),
            slots_filled: 0,
        };
        let mut pending = String::new();

        for part in &self.parts {
            match part {
                Part::Literal(c) => pending.push(*c),
                Part::Slot(slot) => {
                    let Some(c) = input.by_ref().find(|c| slot.accepts(*c)) else {
                        return filled;
                    };
                    filled.masked.push_str(&pending);
                    pending.clear();
                    filled.masked.push(c);
                    filled.raw.push(c);
                    filled.slots_filled += 1;
                },
            }
        }
        // trailing literals only once every slot is filled
        filled.masked.push_str(&pending);
        filled
    }

    /// Conforms `text` to the mask: characters no slot accepts are dropped,
    /// literals are inserted between filled slots, and input past the last
    /// slot is discarded.
    pub fn apply(&self, text: &str) -> String {
        self.fill(text).masked
    }

    /// Strips literals, leaving only the characters that landed in slots.
    pub fn unmask(&self, text: &str) -> String {
        self.fill(text).raw
    }

    /// Whether every slot of the mask is filled by `text`. Without slots,
    /// any non-blank text is complete.
    pub fn is_complete(&self, text: &str) -> bool {
        match self.slot_count() {
            0 => !text.trim().is_empty(),
            slots => self.fill(text).slots_filled == slots,
        }
    }
}

impl Default for InputMask {
    fn default() -> Self {
        Self::new(DEFAULT_MASK)
    }
}

impl From<&str> for InputMask {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl Serialize for InputMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for InputMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}
