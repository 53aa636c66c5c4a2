//! Creativity dimension value object

use serde::{Deserialize, Serialize};

/// One of the four fixed axes a creative response is scored on.
///
/// The set is closed: every score vector carries exactly these four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativityDimension {
    /// Number and richness of ideas
    Fluency,
    /// Variety of categories the ideas span
    Flexibility,
    /// Uniqueness of the ideas
    Originality,
    /// Depth and detail of the ideas
    Elaboration,
}

impl CreativityDimension {
    /// All dimensions, in canonical order.
    pub const ALL: [CreativityDimension; 4] = [
        CreativityDimension::Fluency,
        CreativityDimension::Flexibility,
        CreativityDimension::Originality,
        CreativityDimension::Elaboration,
    ];

    /// Key used in judge output and persisted records
    pub fn as_str(&self) -> &'static str {
        match self {
            CreativityDimension::Fluency => "fluency",
            CreativityDimension::Flexibility => "flexibility",
            CreativityDimension::Originality => "originality",
            CreativityDimension::Elaboration => "elaboration",
        }
    }

    /// Display label shown to subjects
    pub fn label(&self) -> &'static str {
        match self {
            CreativityDimension::Fluency => "流畅性",
            CreativityDimension::Flexibility => "灵活性",
            CreativityDimension::Originality => "独创性",
            CreativityDimension::Elaboration => "精细性",
        }
    }

    /// Position in [`CreativityDimension::ALL`].
    pub fn index(&self) -> usize {
        match self {
            CreativityDimension::Fluency => 0,
            CreativityDimension::Flexibility => 1,
            CreativityDimension::Originality => 2,
            CreativityDimension::Elaboration => 3,
        }
    }
}

impl std::fmt::Display for CreativityDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CreativityDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fluency" => Ok(CreativityDimension::Fluency),
            "flexibility" => Ok(CreativityDimension::Flexibility),
            "originality" => Ok(CreativityDimension::Originality),
            "elaboration" => Ok(CreativityDimension::Elaboration),
            other => Err(format!("unknown creativity dimension: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, dim) in CreativityDimension::ALL.iter().enumerate() {
            assert_eq!(dim.index(), i);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "Originality".parse::<CreativityDimension>().unwrap(),
            CreativityDimension::Originality
        );
        assert!("novelty".parse::<CreativityDimension>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&CreativityDimension::Elaboration).unwrap();
        assert_eq!(json, "\"elaboration\"");
    }
}
