use super::mapping::Direction;

/// First and last scalar of the base Arabic Unicode block.
const ARABIC_BLOCK: std::ops::RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Layout {
    Arabic,
    Latin,
}

impl Layout {
    /// Classifies the dominant script of `text`.
    ///
    /// Presence test, not a majority vote: a single character inside the
    /// Arabic block classifies the whole string as Arabic. Empty input is
    /// Latin (callers short-circuit on empty text before transcoding).
    pub fn of(text: &str) -> Self {
        if text.chars().any(|c| ARABIC_BLOCK.contains(&c)) {
            Self::Arabic
        } else {
            Self::Latin
        }
    }

    /// Direction that converts text of this layout to the other one.
    pub fn correction_direction(self) -> Direction {
        match self {
            Self::Arabic => Direction::ToLatin,
            Self::Latin => Direction::ToArabic,
        }
    }
}
