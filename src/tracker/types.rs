//! Core data types for the nutrition tracker
//!
//! - `Requirements`: daily calorie and protein targets
//! - `FoodEntry`: one recorded food with its computed totals
//! - `FormDraft`: raw, unparsed form text
//! - `Field`: the name of an editable input

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::error::TrackerError;
use super::parse::{display_number, parse_number};

/// Daily nutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    pub calorie_req: f64,
    pub protein_req: f64,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            calorie_req: 2000.0,
            protein_req: 100.0,
        }
    }
}

/// A single recorded food
///
/// Totals are fixed when the entry is built; an entry is only ever replaced
/// whole, never mutated field by field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    pub id: Uuid,
    pub name: String,
    /// Amount eaten in grams
    #[serde(deserialize_with = "nullable_f64")]
    pub amount: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub calories_per_gm: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub proteins_per_gm: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub total_calories: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub total_proteins: f64,
}

impl FoodEntry {
    /// Build an entry with a fresh identifier
    pub fn new(name: impl Into<String>, amount: f64, calories_per_gm: f64, proteins_per_gm: f64) -> Self {
        Self::with_id(Uuid::new_v4(), name, amount, calories_per_gm, proteins_per_gm)
    }

    /// Build an entry under an existing identifier
    pub fn with_id(
        id: Uuid,
        name: impl Into<String>,
        amount: f64,
        calories_per_gm: f64,
        proteins_per_gm: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            calories_per_gm,
            proteins_per_gm,
            total_calories: amount * calories_per_gm,
            total_proteins: amount * proteins_per_gm,
        }
    }
}

/// serde_json writes NaN and infinities as `null`; read them back as NaN
/// instead of rejecting the whole list.
fn nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Raw text of the entry form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub amount: String,
    pub calories_per_gm: String,
    pub proteins_per_gm: String,
}

impl FormDraft {
    /// True when any of the four fields is empty. Whitespace counts as text.
    pub fn is_incomplete(&self) -> bool {
        [
            &self.name,
            &self.amount,
            &self.calories_per_gm,
            &self.proteins_per_gm,
        ]
        .iter()
        .any(|v| v.is_empty())
    }

    /// Copy an entry back into editable text
    pub fn from_entry(entry: &FoodEntry) -> Self {
        Self {
            name: entry.name.clone(),
            amount: display_number(entry.amount),
            calories_per_gm: display_number(entry.calories_per_gm),
            proteins_per_gm: display_number(entry.proteins_per_gm),
        }
    }

    /// Parse the numeric fields and build an entry under `id`
    pub fn to_entry(&self, id: Uuid) -> FoodEntry {
        FoodEntry::with_id(
            id,
            self.name.clone(),
            parse_number(&self.amount),
            parse_number(&self.calories_per_gm),
            parse_number(&self.proteins_per_gm),
        )
    }
}

/// An editable input, named as in the form markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CalorieReq,
    ProteinReq,
    Name,
    Amount,
    CaloriesPerGm,
    ProteinsPerGm,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::CalorieReq,
            Field::ProteinReq,
            Field::Name,
            Field::Amount,
            Field::CaloriesPerGm,
            Field::ProteinsPerGm,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CalorieReq => "calorieReq",
            Field::ProteinReq => "proteinReq",
            Field::Name => "name",
            Field::Amount => "amount",
            Field::CaloriesPerGm => "caloriesPerGm",
            Field::ProteinsPerGm => "proteinsPerGm",
        }
    }

    /// Whether this field edits the daily targets rather than the draft
    pub fn is_requirement(&self) -> bool {
        matches!(self, Field::CalorieReq | Field::ProteinReq)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::all()
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| TrackerError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_totals() {
        let rice = FoodEntry::new("Rice", 150.0, 1.3, 0.027);
        assert_eq!(rice.total_calories, 150.0 * 1.3);
        assert_eq!(rice.total_proteins, 150.0 * 0.027);
        assert_eq!(format!("{:.2}", rice.total_calories), "195.00");
        assert_eq!(format!("{:.2}", rice.total_proteins), "4.05");
    }

    #[test]
    fn test_entry_json_layout() {
        let entry = FoodEntry::new("Egg", 50.0, 1.55, 0.13);
        let json = serde_json::to_value(&entry).unwrap();
        for key in [
            "id",
            "name",
            "amount",
            "caloriesPerGm",
            "proteinsPerGm",
            "totalCalories",
            "totalProteins",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn test_nan_survives_reload() {
        let entry = FoodEntry::new("Mystery", f64::NAN, 2.0, 0.1);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""amount":null"#));

        let back: FoodEntry = serde_json::from_str(&json).unwrap();
        assert!(back.amount.is_nan());
        assert!(back.total_calories.is_nan());
        assert_eq!(back.calories_per_gm, 2.0);
    }

    #[test]
    fn test_draft_incomplete() {
        let mut draft = FormDraft {
            name: "Rice".into(),
            amount: "150".into(),
            calories_per_gm: "1.3".into(),
            proteins_per_gm: "0.027".into(),
        };
        assert!(!draft.is_incomplete());

        draft.proteins_per_gm = "".into();
        assert!(draft.is_incomplete());
        assert!(FormDraft::default().is_incomplete());

        draft.proteins_per_gm = "0.027".into();
        draft.name = " ".into();
        assert!(!draft.is_incomplete());
    }

    #[test]
    fn test_draft_from_entry_display_form() {
        let entry = FoodEntry::new("Rice", 150.0, 1.3, 0.027);
        let draft = FormDraft::from_entry(&entry);
        assert_eq!(draft.name, "Rice");
        assert_eq!(draft.amount, "150");
        assert_eq!(draft.calories_per_gm, "1.3");
        assert_eq!(draft.proteins_per_gm, "0.027");
    }

    #[test]
    fn test_field_names() {
        for field in Field::all() {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), *field);
        }
        assert!("calories".parse::<Field>().is_err());
        assert!(Field::CalorieReq.is_requirement());
        assert!(!Field::Amount.is_requirement());
    }
}
