use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

/// The kinds of protection or enhancement that a solution provides (v1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum AdaptationKind {
    #[strum(serialize = "Pluvial flooding")]
    PluvialFlooding,
    #[strum(serialize = "Drought")]
    Drought,
    #[strum(serialize = "Heat")]
    Heat,
    #[strum(serialize = "Coastal and Fluvial flooding")]
    CoastalFluvialFlooding,
    #[strum(serialize = "Groundwater")]
    Groundwater,
}

/// Adaptation score, an integer between 0 and 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Score(u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Adaptation score out of range (0-100): {0}")]
pub struct ScoreOutOfRange(pub i64);

impl Score {
    pub const fn min() -> Self {
        Self(0)
    }

    pub const fn max() -> Self {
        Self(100)
    }

    pub fn new(value: i64) -> Result<Self, ScoreOutOfRange> {
        if (0..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ScoreOutOfRange(value))
        }
    }
}

impl From<Score> for u8 {
    fn from(from: Score) -> Self {
        from.0
    }
}

impl TryFrom<i64> for Score {
    type Error = ScoreOutOfRange;
    fn try_from(from: i64) -> Result<Self, Self::Error> {
        Self::new(from)
    }
}

/// Association of a solution with an adaptation target (v1 scoring).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adaptation {
    pub kind: AdaptationKind,
    pub value: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_kind() {
        let kind: AdaptationKind = "Coastal and Fluvial flooding".parse().unwrap();
        assert_eq!(kind, AdaptationKind::CoastalFluvialFlooding);
        assert_eq!(kind.to_string(), "Coastal and Fluvial flooding");
    }

    #[test]
    fn score_bounds() {
        assert!(Score::new(0).is_ok());
        assert!(Score::new(100).is_ok());
        assert_eq!(Score::new(101), Err(ScoreOutOfRange(101)));
        assert_eq!(Score::new(-1), Err(ScoreOutOfRange(-1)));
    }
}
