//! Strength dimensions and the score vectors built over them.
//!
//! `ScoreSet` always carries exactly the eight canonical dimensions: it is a
//! plain struct, so a ninth key cannot exist. `PartialScoreSet` is the
//! per-option contribution and is validated when it is parsed.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::ScoringError;

/// One of the eight fixed strength axes.
///
/// Declaration order is the canonical enumeration order; it drives the
/// dominant-dimension tie-break and the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthDimension {
    Com,
    Tech,
    #[serde(rename = "Créa")]
    Crea,
    Struct,
    Lead,
    Ana,
    Rel,
    Vision,
}

impl StrengthDimension {
    pub const ALL: [StrengthDimension; 8] = [
        StrengthDimension::Com,
        StrengthDimension::Tech,
        StrengthDimension::Crea,
        StrengthDimension::Struct,
        StrengthDimension::Lead,
        StrengthDimension::Ana,
        StrengthDimension::Rel,
        StrengthDimension::Vision,
    ];

    /// Wire label, as used in question payloads and catalogs.
    pub fn label(self) -> &'static str {
        match self {
            StrengthDimension::Com => "Com",
            StrengthDimension::Tech => "Tech",
            StrengthDimension::Crea => "Créa",
            StrengthDimension::Struct => "Struct",
            StrengthDimension::Lead => "Lead",
            StrengthDimension::Ana => "Ana",
            StrengthDimension::Rel => "Rel",
            StrengthDimension::Vision => "Vision",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl fmt::Display for StrengthDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accumulated points for every dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreSet {
    #[serde(rename = "Com", default)]
    pub com: u32,
    #[serde(rename = "Tech", default)]
    pub tech: u32,
    #[serde(rename = "Créa", default)]
    pub crea: u32,
    #[serde(rename = "Struct", default)]
    pub structure: u32,
    #[serde(rename = "Lead", default)]
    pub lead: u32,
    #[serde(rename = "Ana", default)]
    pub ana: u32,
    #[serde(rename = "Rel", default)]
    pub rel: u32,
    #[serde(rename = "Vision", default)]
    pub vision: u32,
}

impl ScoreSet {
    pub fn get(&self, dimension: StrengthDimension) -> u32 {
        match dimension {
            StrengthDimension::Com => self.com,
            StrengthDimension::Tech => self.tech,
            StrengthDimension::Crea => self.crea,
            StrengthDimension::Struct => self.structure,
            StrengthDimension::Lead => self.lead,
            StrengthDimension::Ana => self.ana,
            StrengthDimension::Rel => self.rel,
            StrengthDimension::Vision => self.vision,
        }
    }

    fn slot_mut(&mut self, dimension: StrengthDimension) -> &mut u32 {
        match dimension {
            StrengthDimension::Com => &mut self.com,
            StrengthDimension::Tech => &mut self.tech,
            StrengthDimension::Crea => &mut self.crea,
            StrengthDimension::Struct => &mut self.structure,
            StrengthDimension::Lead => &mut self.lead,
            StrengthDimension::Ana => &mut self.ana,
            StrengthDimension::Rel => &mut self.rel,
            StrengthDimension::Vision => &mut self.vision,
        }
    }

    /// Adds `points` to one dimension. Overflow is an error, never a wrap.
    pub(crate) fn add(
        &mut self,
        dimension: StrengthDimension,
        points: u32,
    ) -> Result<(), ScoringError> {
        let slot = self.slot_mut(dimension);
        *slot = slot
            .checked_add(points)
            .ok_or(ScoringError::Overflow { dimension })?;
        Ok(())
    }

    /// Iterates `(dimension, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StrengthDimension, u32)> + '_ {
        StrengthDimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

/// Points granted by a single answer option. Absent dimensions contribute 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Option<i64>>")]
pub struct PartialScoreSet(BTreeMap<StrengthDimension, u32>);

impl PartialScoreSet {
    pub fn iter(&self) -> impl Iterator<Item = (StrengthDimension, u32)> + '_ {
        self.0.iter().map(|(d, p)| (*d, *p))
    }
}

#[cfg(test)]
impl PartialScoreSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, dimension: StrengthDimension, points: u32) -> Self {
        self.0.insert(dimension, points);
        self
    }

    pub(crate) fn get(&self, dimension: StrengthDimension) -> u32 {
        self.0.get(&dimension).copied().unwrap_or(0)
    }
}

impl TryFrom<BTreeMap<String, Option<i64>>> for PartialScoreSet {
    type Error = ScoringError;

    fn try_from(raw: BTreeMap<String, Option<i64>>) -> Result<Self, Self::Error> {
        let mut points = BTreeMap::new();
        for (key, value) in raw {
            let dimension = StrengthDimension::from_label(&key)
                .ok_or_else(|| ScoringError::UnknownDimension(key.clone()))?;
            // Generative schemas emit null for unset properties.
            let Some(value) = value else { continue };
            let value = u32::try_from(value).map_err(|_| ScoringError::InvalidPoints {
                dimension,
                value,
            })?;
            points.insert(dimension, value);
        }
        Ok(Self(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_ord() {
        let mut sorted = StrengthDimension::ALL;
        sorted.sort();
        assert_eq!(sorted, StrengthDimension::ALL);
        assert!(StrengthDimension::Tech < StrengthDimension::Vision);
    }

    #[test]
    fn test_label_roundtrips_for_every_dimension() {
        for d in StrengthDimension::ALL {
            assert_eq!(StrengthDimension::from_label(d.label()), Some(d));
        }
        assert_eq!(StrengthDimension::from_label("Crea"), None);
        assert_eq!(StrengthDimension::from_label("tech"), None);
    }

    #[test]
    fn test_dimension_serializes_with_accented_label() {
        assert_eq!(
            serde_json::to_string(&StrengthDimension::Crea).unwrap(),
            r#""Créa""#
        );
    }

    #[test]
    fn test_score_set_serializes_all_eight_keys() {
        let value = serde_json::to_value(ScoreSet::default()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 8);
        for d in StrengthDimension::ALL {
            assert_eq!(obj[d.label()], 0);
        }
    }

    #[test]
    fn test_score_set_missing_keys_default_to_zero() {
        let scores: ScoreSet = serde_json::from_str(r#"{"Tech": 12}"#).unwrap();
        assert_eq!(scores.get(StrengthDimension::Tech), 12);
        assert_eq!(scores.get(StrengthDimension::Com), 0);
    }

    #[test]
    fn test_score_set_rejects_ninth_key() {
        let err = serde_json::from_str::<ScoreSet>(r#"{"Tech": 1, "Luck": 3}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_score_set_rejects_negative_value() {
        assert!(serde_json::from_str::<ScoreSet>(r#"{"Tech": -1}"#).is_err());
    }

    #[test]
    fn test_add_reports_overflow() {
        let mut scores = ScoreSet {
            lead: u32::MAX,
            ..ScoreSet::default()
        };
        let err = scores.add(StrengthDimension::Lead, 1).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::Overflow {
                dimension: StrengthDimension::Lead
            }
        ));
        assert_eq!(scores.lead, u32::MAX);
    }

    #[test]
    fn test_partial_parses_known_labels() {
        let partial: PartialScoreSet =
            serde_json::from_str(r#"{"Tech": 3, "Créa": 1}"#).unwrap();
        assert_eq!(partial.get(StrengthDimension::Tech), 3);
        assert_eq!(partial.get(StrengthDimension::Crea), 1);
        assert_eq!(partial.get(StrengthDimension::Rel), 0);
    }

    #[test]
    fn test_partial_skips_null_values() {
        let partial: PartialScoreSet =
            serde_json::from_str(r#"{"Tech": 2, "Ana": null}"#).unwrap();
        assert_eq!(partial.iter().count(), 1);
    }

    #[test]
    fn test_partial_rejects_unknown_dimension() {
        let err = serde_json::from_str::<PartialScoreSet>(r#"{"Charisme": 2}"#).unwrap_err();
        assert!(err.to_string().contains("Charisme"), "{err}");
    }

    #[test]
    fn test_partial_rejects_negative_points() {
        let err = serde_json::from_str::<PartialScoreSet>(r#"{"Lead": -4}"#).unwrap_err();
        assert!(err.to_string().contains("-4"), "{err}");
    }

    #[test]
    fn test_partial_serializes_as_label_map() {
        let partial = PartialScoreSet::new()
            .with(StrengthDimension::Vision, 2)
            .with(StrengthDimension::Com, 1);
        assert_eq!(
            serde_json::to_string(&partial).unwrap(),
            r#"{"Com":1,"Vision":2}"#
        );
    }
}
