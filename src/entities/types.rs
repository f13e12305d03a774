//! Structured query entities / 查询实体类型

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Comparison kind of a price constraint / 价格约束类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceKind {
    None,
    Under,
    Above,
    Between,
}

impl PriceKind {
    /// Wire name; `None` has no name and serializes as `null`
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            PriceKind::None => None,
            PriceKind::Under => Some("under"),
            PriceKind::Above => Some("above"),
            PriceKind::Between => Some("between"),
        }
    }
}

impl Serialize for PriceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_none(),
        }
    }
}

/// Price range; each variant carries exactly the bounds it needs / 价格区间
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PriceRange {
    #[default]
    None,
    Under { to: f64 },
    Above { from: f64 },
    /// Invariant: `from <= to`, use [`PriceRange::between`] to build
    Between { from: f64, to: f64 },
}

impl PriceRange {
    /// Inclusive range from two bounds in any order
    pub fn between(a: f64, b: f64) -> Self {
        PriceRange::Between {
            from: a.min(b),
            to: a.max(b),
        }
    }

    pub fn kind(&self) -> PriceKind {
        match self {
            PriceRange::None => PriceKind::None,
            PriceRange::Under { .. } => PriceKind::Under,
            PriceRange::Above { .. } => PriceKind::Above,
            PriceRange::Between { .. } => PriceKind::Between,
        }
    }

    pub fn from(&self) -> Option<f64> {
        match *self {
            PriceRange::Above { from } | PriceRange::Between { from, .. } => Some(from),
            _ => None,
        }
    }

    pub fn to(&self) -> Option<f64> {
        match *self {
            PriceRange::Under { to } | PriceRange::Between { to, .. } => Some(to),
            _ => None,
        }
    }
}

impl Serialize for PriceRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PriceRange", 3)?;
        state.serialize_field("from", &self.from())?;
        state.serialize_field("to", &self.to())?;
        state.serialize_field("type", &self.kind())?;
        state.end()
    }
}

/// Everything extracted from one query / 单次查询提取出的实体
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ExtractedEntities {
    #[serde(rename = "Medical Equipment")]
    pub equipment: Vec<String>,
    #[serde(rename = "Location")]
    pub location: Vec<String>,
    #[serde(rename = "Condition")]
    pub condition: Vec<String>,
    #[serde(rename = "Price")]
    pub price: PriceRange,
    #[serde(rename = "Other")]
    pub other: Vec<String>,
    #[serde(rename = "Location Missing")]
    pub location_missing: bool,
}

impl ExtractedEntities {
    pub fn primary_equipment(&self) -> Option<&str> {
        self.equipment.first().map(String::as_str)
    }

    /// First matched location, `None` when no location matched
    pub fn primary_location(&self) -> Option<&str> {
        if self.location_missing {
            return None;
        }
        self.location.first().map(String::as_str)
    }

    /// First condition word, lower-cased
    pub fn primary_condition(&self) -> Option<String> {
        self.condition.first().map(|c| c.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_between_orders_bounds() {
        let range = PriceRange::between(300.0, 100.0);
        assert_eq!(range, PriceRange::Between { from: 100.0, to: 300.0 });
        assert_eq!(range.from(), Some(100.0));
        assert_eq!(range.to(), Some(300.0));
        assert_eq!(range.kind(), PriceKind::Between);
    }

    #[test]
    fn test_price_range_wire_shape() {
        assert_eq!(
            serde_json::to_value(PriceRange::None).unwrap(),
            json!({"from": null, "to": null, "type": null})
        );
        assert_eq!(
            serde_json::to_value(PriceRange::Under { to: 500.0 }).unwrap(),
            json!({"from": null, "to": 500.0, "type": "under"})
        );
        assert_eq!(
            serde_json::to_value(PriceRange::Above { from: 20.0 }).unwrap(),
            json!({"from": 20.0, "to": null, "type": "above"})
        );
    }

    #[test]
    fn test_entities_wire_names() {
        let entities = ExtractedEntities {
            equipment: vec!["MRI Scanner".to_string()],
            location_missing: true,
            ..Default::default()
        };
        let value = serde_json::to_value(&entities).unwrap();
        assert_eq!(value["Medical Equipment"], json!(["MRI Scanner"]));
        assert_eq!(value["Location"], json!([]));
        assert_eq!(value["Location Missing"], json!(true));
        assert_eq!(value["Price"]["type"], json!(null));
    }

    #[test]
    fn test_primary_accessors() {
        let entities = ExtractedEntities {
            equipment: vec!["a".to_string(), "b".to_string()],
            location: vec!["Madrid".to_string()],
            condition: vec!["Used".to_string()],
            ..Default::default()
        };
        assert_eq!(entities.primary_equipment(), Some("a"));
        assert_eq!(entities.primary_location(), Some("Madrid"));
        assert_eq!(entities.primary_condition().as_deref(), Some("used"));
    }
}
