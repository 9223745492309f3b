use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::fish_count_adapter::FishCountAdapter;
use super::has_fish_adapter::HasFishAdapter;
use crate::metadata::domain::metadata_adapter::MetadataAdapter;
use crate::shared::crop_error::CropError;

/// Metadata layouts understood by the cropper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetadataSchema {
    /// `{"fish": {"fish_num": n, "bbox": [...]}}`
    #[default]
    FishCount,
    /// `{<key>: {"has_fish": bool, "fish": [{"bbox": [...]}]}}`
    HasFish,
}

impl MetadataSchema {
    pub const ALL: &[MetadataSchema] = &[MetadataSchema::FishCount, MetadataSchema::HasFish];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataSchema::FishCount => "fish-count",
            MetadataSchema::HasFish => "has-fish",
        }
    }
}

impl fmt::Display for MetadataSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetadataSchema {
    type Err = CropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetadataSchema::ALL
            .iter()
            .copied()
            .find(|schema| schema.as_str() == s)
            .ok_or_else(|| CropError::UnknownSchema(s.to_string()))
    }
}

/// Creates the adapter for the configured schema.
pub fn create_adapter(schema: MetadataSchema) -> Box<dyn MetadataAdapter> {
    log::debug!("Using '{schema}' metadata schema");
    match schema {
        MetadataSchema::FishCount => Box::new(FishCountAdapter::new()),
        MetadataSchema::HasFish => Box::new(HasFishAdapter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::bounding_box::BoundingBox;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("fish-count", MetadataSchema::FishCount)]
    #[case("has-fish", MetadataSchema::HasFish)]
    fn test_parse_round_trips_display(#[case] text: &str, #[case] schema: MetadataSchema) {
        assert_eq!(text.parse::<MetadataSchema>().unwrap(), schema);
        assert_eq!(schema.to_string(), text);
    }

    #[test]
    fn test_parse_unknown_schema() {
        let err = "drexel".parse::<MetadataSchema>().unwrap_err();
        assert!(matches!(err, CropError::UnknownSchema(ref s) if s == "drexel"));
    }

    #[test]
    fn test_default_is_fish_count() {
        assert_eq!(MetadataSchema::default(), MetadataSchema::FishCount);
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&MetadataSchema::HasFish).unwrap();
        assert_eq!(json, "\"has-fish\"");
        let parsed: MetadataSchema = serde_json::from_str("\"fish-count\"").unwrap();
        assert_eq!(parsed, MetadataSchema::FishCount);
    }

    #[test]
    fn test_factory_selects_fish_count_adapter() {
        let adapter = create_adapter(MetadataSchema::FishCount);
        let v = json!({"fish": {"fish_num": 1, "bbox": [1, 2, 3, 4]}});
        assert_eq!(
            adapter.extract_bbox(&v).unwrap(),
            Some(BoundingBox::new(1.0, 2.0, 3.0, 4.0))
        );
    }

    #[test]
    fn test_factory_selects_has_fish_adapter() {
        let adapter = create_adapter(MetadataSchema::HasFish);
        let v = json!({"img": {"has_fish": true, "fish": [{"bbox": [5, 6, 7, 8]}]}});
        assert_eq!(
            adapter.extract_bbox(&v).unwrap(),
            Some(BoundingBox::new(5.0, 6.0, 7.0, 8.0))
        );
    }
}
