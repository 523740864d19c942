//! Plain-text rendering
//!
//! Terminal counterparts of the browser views: the entry table and the
//! stacked bar charts. Segment glyphs follow the palette index, so the same
//! food keeps the same glyph in both charts.

use std::fmt::Write;

use crate::tracker::{ChartModel, FoodEntry, PALETTE};

/// Bar width limits in cells
pub const MIN_WIDTH: usize = 10;
pub const MAX_WIDTH: usize = 400;

/// One glyph per palette slot
pub const GLYPHS: [char; 10] = ['#', '=', '*', '+', '%', '@', '&', '$', 'o', 'x'];

const _: () = assert!(GLYPHS.len() == PALETTE.len());

/// Render the food list as a numbered table with totals to 2 decimals
pub fn render_table(foods: &[FoodEntry]) -> String {
    let name_width = foods
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Food".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<name_width$}  {:>10}  {:>10}",
        "#", "Food", "Calories", "Proteins"
    );
    let _ = writeln!(out, "{}", "-".repeat(3 + 2 + name_width + 2 + 10 + 2 + 10));

    for (idx, food) in foods.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<name_width$}  {:>10.2}  {:>10.2}",
            idx + 1,
            food.name,
            food.total_calories,
            food.total_proteins
        );
    }
    out
}

/// Column a value lands in on a bar `width` cells wide
fn column(chart: &ChartModel, value: f64, width: usize) -> usize {
    let pos = (chart.fraction(value) * width as f64).round();
    if pos.is_nan() || pos < 0.0 {
        0
    } else {
        (pos as usize).min(width)
    }
}

/// Render one chart as a stacked bar with a requirement marker underneath
pub fn render_chart(chart: &ChartModel, width: usize) -> String {
    let width = width.clamp(MIN_WIDTH, MAX_WIDTH);
    let nutrient = chart.nutrient();
    let mut bar = vec![' '; width];

    // Segment boundaries are taken from the running sum so rounding never
    // drifts the end of the bar
    let mut running = 0.0;
    for segment in chart.row.segments.iter().filter(|s| s.is_drawn()) {
        let start = column(chart, running, width);
        running += segment.value;
        let end = column(chart, running, width);
        for cell in bar.iter_mut().take(end).skip(start) {
            *cell = GLYPHS[segment.palette_index];
        }
    }

    let mut marker = vec![' '; width + 1];
    marker[column(chart, chart.requirement, width)] = '|';

    let mut out = String::new();
    let _ = writeln!(out, "{}", nutrient.title());
    let _ = writeln!(
        out,
        "{:>9} [{}]",
        nutrient.label(),
        bar.iter().collect::<String>()
    );
    let _ = writeln!(
        out,
        "{:>9}  {} Requirement",
        "",
        marker.iter().collect::<String>().trim_end()
    );
    let _ = writeln!(out, "{:>9}  0 .. {:.2}", "", chart.upper_bound);

    for segment in &chart.row.segments {
        let _ = writeln!(
            out,
            "  {} {} ({:.2})",
            GLYPHS[segment.palette_index], segment.label, segment.value
        );
    }

    let _ = writeln!(
        out,
        "  Total {:.2} / {:.2}",
        chart.row.total(),
        chart.requirement
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{build_chart, Nutrient, Requirements};

    fn bar_line(rendered: &str) -> &str {
        let line = rendered.lines().nth(1).unwrap();
        let start = line.find('[').unwrap() + 1;
        let end = line.rfind(']').unwrap();
        &line[start..end]
    }

    #[test]
    fn test_table_rows() {
        let foods = vec![
            FoodEntry::new("Rice", 150.0, 1.3, 0.027),
            FoodEntry::new("Egg", 50.0, 1.55, 0.13),
        ];
        let table = render_table(&foods);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Calories"));
        assert!(lines[2].starts_with("  1  Rice"));
        assert!(lines[2].contains("195.00"));
        assert!(lines[2].contains("4.05"));
        assert!(lines[3].contains("77.50"));
    }

    #[test]
    fn test_bar_under_requirement() {
        let foods = vec![FoodEntry::new("Pasta", 500.0, 2.0, 0.1)];
        let chart = build_chart(&foods, &Requirements::default(), Nutrient::Calories);
        let rendered = render_chart(&chart, 40);

        // 1000 of 2000 fills half the bar
        let bar = bar_line(&rendered);
        assert_eq!(bar.chars().count(), 40);
        assert_eq!(bar.chars().filter(|&c| c == '#').count(), 20);

        let marker = rendered.lines().nth(2).unwrap();
        assert_eq!(marker.find('|'), Some(9 + 2 + 40));
    }

    #[test]
    fn test_bar_over_requirement() {
        let foods = vec![
            FoodEntry::new("Pasta", 500.0, 3.0, 0.1),
            FoodEntry::new("Cake", 250.0, 4.0, 0.05),
        ];
        let chart = build_chart(&foods, &Requirements::default(), Nutrient::Calories);
        let rendered = render_chart(&chart, 50);

        let bar = bar_line(&rendered);
        assert_eq!(bar.chars().filter(|&c| c == '#').count(), 30);
        assert_eq!(bar.chars().filter(|&c| c == '=').count(), 20);

        // Requirement sits at 80% of the axis
        let marker = rendered.lines().nth(2).unwrap();
        assert_eq!(marker.find('|'), Some(9 + 2 + 40));
        assert!(rendered.contains("Total 2500.00 / 2000.00"));
    }

    #[test]
    fn test_nan_segment_draws_nothing() {
        let foods = vec![FoodEntry::new("Soup", f64::NAN, 0.4, 0.02)];
        let chart = build_chart(&foods, &Requirements::default(), Nutrient::Calories);
        let rendered = render_chart(&chart, 20);
        assert!(bar_line(&rendered).chars().all(|c| c == ' '));
        assert!(rendered.contains("Soup (NaN)"));
    }

    #[test]
    fn test_width_is_clamped() {
        let chart = build_chart(&[], &Requirements::default(), Nutrient::Calories);
        assert_eq!(bar_line(&render_chart(&chart, usize::MAX)).chars().count(), MAX_WIDTH);
        assert_eq!(bar_line(&render_chart(&chart, 0)).chars().count(), MIN_WIDTH);
    }

    #[test]
    fn test_nan_segment_keeps_later_foods() {
        let foods = vec![
            FoodEntry::new("Soup", f64::NAN, 0.4, 0.02),
            FoodEntry::new("Pasta", 500.0, 2.0, 0.1),
        ];
        let chart = build_chart(&foods, &Requirements::default(), Nutrient::Calories);
        let rendered = render_chart(&chart, 40);

        // Pasta is the second entry, so it draws with the second glyph
        let bar = bar_line(&rendered);
        assert_eq!(bar.chars().filter(|&c| c == '=').count(), 20);
        assert!(bar.starts_with('='));
        assert!(!bar.contains('#'));
    }
}
