//! Chart aggregation
//!
//! Each nutrient chart is a single horizontal stacked bar: one row whose
//! segments are the foods, laid end to end, compared against a reference line
//! at the daily requirement.

use super::types::{FoodEntry, Requirements};

/// Segment colors, assigned by list position and cycling past the end
pub const PALETTE: [&str; 10] = [
    "#f87171", "#60a5fa", "#34d399", "#fbbf24", "#a78bfa",
    "#f472b6", "#10b981", "#fb923c", "#c084fc", "#818cf8",
];

/// Palette color for the entry at `index`
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Which nutrient a chart tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    Proteins,
}

impl Nutrient {
    pub fn all() -> &'static [Nutrient] {
        &[Nutrient::Calories, Nutrient::Proteins]
    }

    /// This nutrient's total for one entry
    pub fn total(&self, entry: &FoodEntry) -> f64 {
        match self {
            Nutrient::Calories => entry.total_calories,
            Nutrient::Proteins => entry.total_proteins,
        }
    }

    /// This nutrient's daily target
    pub fn requirement(&self, requirements: &Requirements) -> f64 {
        match self {
            Nutrient::Calories => requirements.calorie_req,
            Nutrient::Proteins => requirements.protein_req,
        }
    }

    /// Category-axis label
    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Proteins => "Proteins",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories Intake",
            Nutrient::Proteins => "Proteins Intake",
        }
    }

    /// Stroke color of the dashed requirement line
    pub fn reference_color(&self) -> &'static str {
        match self {
            Nutrient::Calories => "#f87171",
            Nutrient::Proteins => "#60a5fa",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Nutrient::Calories => write!(f, "calories"),
            Nutrient::Proteins => write!(f, "proteins"),
        }
    }
}

impl std::str::FromStr for Nutrient {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "calories" | "calorie" | "kcal" => Ok(Nutrient::Calories),
            "proteins" | "protein" => Ok(Nutrient::Proteins),
            other => Err(format!("unknown nutrient '{}', expected calories or proteins", other)),
        }
    }
}

/// One food's share of a stacked bar
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: f64,
    /// Index into [`PALETTE`]
    pub palette_index: usize,
}

impl Segment {
    pub fn color(&self) -> &'static str {
        PALETTE[self.palette_index]
    }

    /// Whether the segment occupies any length on the bar. Invalid totals
    /// are skipped and the next segment starts where the last drawn one ended.
    pub fn is_drawn(&self) -> bool {
        self.value.is_finite()
    }
}

/// The single aggregate row for one nutrient
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    pub nutrient: Nutrient,
    pub segments: Vec<Segment>,
}

impl SeriesRow {
    /// Sum of every segment
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }

    /// Length of the drawn bar: the sum over finite segments only
    pub fn drawn_total(&self) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.is_drawn())
            .map(|s| s.value)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Reduce the food list into one row, one segment per entry in list order
pub fn build_series(foods: &[FoodEntry], nutrient: Nutrient) -> SeriesRow {
    let segments = foods
        .iter()
        .enumerate()
        .map(|(idx, food)| Segment {
            label: food.name.clone(),
            value: nutrient.total(food),
            palette_index: idx % PALETTE.len(),
        })
        .collect();

    SeriesRow { nutrient, segments }
}

/// Upper end of the value axis: whichever of requirement and drawn bar is
/// larger, so both stay in view. A NaN requirement yields the bar length.
pub fn axis_upper_bound(row: &SeriesRow, requirement: f64) -> f64 {
    requirement.max(row.drawn_total())
}

/// Everything needed to draw one nutrient chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub row: SeriesRow,
    pub requirement: f64,
    pub upper_bound: f64,
}

impl ChartModel {
    pub fn nutrient(&self) -> Nutrient {
        self.row.nutrient
    }

    /// Position of `value` along the axis as a fraction of the upper bound
    pub fn fraction(&self, value: f64) -> f64 {
        if self.upper_bound > 0.0 && self.upper_bound.is_finite() {
            value / self.upper_bound
        } else {
            0.0
        }
    }
}

/// Build the chart for `nutrient` from the current list and targets
pub fn build_chart(foods: &[FoodEntry], requirements: &Requirements, nutrient: Nutrient) -> ChartModel {
    let row = build_series(foods, nutrient);
    let requirement = nutrient.requirement(requirements);
    let upper_bound = axis_upper_bound(&row, requirement);

    ChartModel {
        row,
        requirement,
        upper_bound,
    }
}
