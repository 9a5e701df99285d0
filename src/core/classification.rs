//! Per-letter feedback

use std::fmt;

/// Outcome for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Same letter at the same position
    Correct,
    /// Letter is available elsewhere in the answer
    Misplaced,
    /// No unclaimed occurrence of the letter in the answer
    Absent,
}

impl Classification {
    pub const ALL: [Self; 3] = [Self::Correct, Self::Misplaced, Self::Absent];

    /// Single-character symbol: `G`, `Y` or `-`
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Misplaced => 'Y',
            Self::Absent => '-',
        }
    }

    /// Square emoji used when sharing results
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/'?'/🟨 for misplaced
    /// - '-'/'_'/'N'/'n'/⬜ for absent
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '?' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | 'N' | 'n' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Correct => "correct",
            Self::Misplaced => "misplaced",
            Self::Absent => "absent",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_parse_back() {
        for c in Classification::ALL {
            assert_eq!(Classification::from_symbol(c.symbol()), Some(c));
            assert_eq!(Classification::from_symbol(c.emoji()), Some(c));
        }
    }

    #[test]
    fn legacy_symbols() {
        assert_eq!(
            Classification::from_symbol('?'),
            Some(Classification::Misplaced)
        );
        assert_eq!(Classification::from_symbol('N'), Some(Classification::Absent));
        assert_eq!(Classification::from_symbol('x'), None);
    }
}
