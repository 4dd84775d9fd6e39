use serde::{Deserialize, Serialize};

/// One of the four grammatical-person positions of a conjugation table.
///
/// The discriminant order is the index order of every `forms` array in the
/// catalog, of stored attempts, and of submitted answers. `index` and
/// `from_index` are the only mapping between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PronounSlot {
    FirstSingular,
    ThirdSingular,
    FirstPlural,
    ThirdPlural,
}

impl PronounSlot {
    /// Number of slots in a conjugation table.
    pub const COUNT: usize = 4;

    /// All slots in index order.
    pub const ALL: [PronounSlot; Self::COUNT] = [
        PronounSlot::FirstSingular,
        PronounSlot::ThirdSingular,
        PronounSlot::FirstPlural,
        PronounSlot::ThirdPlural,
    ];

    /// Position of this slot within a `forms` array.
    pub const fn index(self) -> usize {
        match self {
            PronounSlot::FirstSingular => 0,
            PronounSlot::ThirdSingular => 1,
            PronounSlot::FirstPlural => 2,
            PronounSlot::ThirdPlural => 3,
        }
    }

    /// Inverse of [`PronounSlot::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Pronoun shown to the learner.
    pub fn label(self) -> &'static str {
        match self {
            PronounSlot::FirstSingular => "eu",
            PronounSlot::ThirdSingular => "ele",
            PronounSlot::FirstPlural => "nós",
            PronounSlot::ThirdPlural => "eles",
        }
    }
}

impl std::fmt::Display for PronounSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
