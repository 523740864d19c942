//! Chart Component
//!
//! Horizontal stacked bar using HTML5 Canvas.

use leptos::*;
use nutrition_tracker::tracker::{ChartModel, Nutrient};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::use_global_state;

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 100.0;

/// Plot margins: top, right, bottom, left
const MARGIN: (f64, f64, f64, f64) = (10.0, 30.0, 10.0, 70.0);

/// Height reserved under the bar for axis ticks
const AXIS_HEIGHT: f64 = 20.0;

/// One rectangle of the stacked bar, in canvas pixels
#[derive(Debug, Clone, PartialEq)]
struct BarRect {
    x: f64,
    width: f64,
    color: &'static str,
}

/// Lay segments end to end across `plot_width` pixels starting at `left`
fn bar_rects(chart: &ChartModel, left: f64, plot_width: f64) -> Vec<BarRect> {
    let mut rects = Vec::with_capacity(chart.row.segments.len());
    let mut running = 0.0;

    for segment in chart.row.segments.iter().filter(|s| s.is_drawn()) {
        let start = chart.fraction(running);
        running += segment.value;
        let end = chart.fraction(running);

        let width = (end - start) * plot_width;
        if width.is_finite() && width > 0.0 {
            rects.push(BarRect {
                x: left + start * plot_width,
                width,
                color: segment.color(),
            });
        }
    }
    rects
}

/// Single-nutrient intake chart
#[component]
pub fn IntakeChart(nutrient: Nutrient) -> impl IntoView {
    let state = use_global_state();
    let canvas_ref = create_node_ref::<html::Canvas>();

    let chart = create_memo(move |_| state.chart(nutrient));

    // Redraw whenever the list or requirement changes
    create_effect(move |_| {
        let model = chart.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &model);
        }
    });

    view! {
        <div class="mt-10">
            <h3 class="text-xl font-semibold mb-2 text-center">{nutrient.title()}</h3>
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH.to_string()
                height=CANVAS_HEIGHT.to_string()
                class="w-full h-24"
            />
            <ChartLegend chart=chart />
        </div>
    }
}

/// Legend showing each food's color
#[component]
fn ChartLegend(chart: Memo<ChartModel>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-2">
            {move || {
                chart.get()
                    .row
                    .segments
                    .into_iter()
                    .map(|segment| {
                        let color = segment.color();
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm">{segment.label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, chart: &ChartModel) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (margin_top, margin_right, margin_bottom, margin_left) = MARGIN;

    let plot_width = width - margin_left - margin_right;
    let bar_top = margin_top;
    let bar_height = height - margin_top - margin_bottom - AXIS_HEIGHT;
    let axis_y = bar_top + bar_height;

    ctx.clear_rect(0.0, 0.0, width, height);

    // Category label
    ctx.set_fill_style(&"#374151".into());
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text(chart.nutrient().label(), 5.0, bar_top + bar_height / 2.0 + 4.0);

    // Stacked segments
    for rect in bar_rects(chart, margin_left, plot_width) {
        ctx.set_fill_style(&rect.color.into());
        ctx.fill_rect(rect.x, bar_top, rect.width, bar_height);
    }

    // Value axis with 5 ticks
    ctx.set_stroke_style(&"#9ca3af".into());
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(margin_left, axis_y);
    ctx.line_to(margin_left + plot_width, axis_y);
    ctx.stroke();

    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("11px sans-serif");
    for i in 0..=4 {
        let x = margin_left + (i as f64 / 4.0) * plot_width;
        let value = chart.upper_bound * i as f64 / 4.0;
        let _ = ctx.fill_text(&format!("{:.0}", value), x - 10.0, axis_y + 14.0);
    }

    // Dashed requirement line
    let fraction = chart.fraction(chart.requirement);
    if fraction.is_finite() {
        let x = margin_left + fraction * plot_width;
        let dash = js_sys::Array::of2(&JsValue::from_f64(5.0), &JsValue::from_f64(5.0));

        ctx.set_stroke_style(&chart.nutrient().reference_color().into());
        ctx.set_line_width(2.0);
        let _ = ctx.set_line_dash(&dash);
        ctx.begin_path();
        ctx.move_to(x, margin_top);
        ctx.line_to(x, axis_y);
        ctx.stroke();
        let _ = ctx.set_line_dash(&js_sys::Array::new());

        ctx.set_fill_style(&chart.nutrient().reference_color().into());
        let _ = ctx.fill_text("Requirement", x - 70.0, margin_top + 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrition_tracker::tracker::{build_chart, FoodEntry, Requirements};

    #[test]
    fn test_segments_fill_proportionally() {
        let foods = vec![
            FoodEntry::new("Rice", 500.0, 1.0, 0.1),
            FoodEntry::new("Egg", 500.0, 1.0, 0.1),
        ];
        let chart = build_chart(&foods, &Requirements::default(), Nutrient::Calories);
        let rects = bar_rects(&chart, 0.0, 800.0);

        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], BarRect { x: 0.0, width: 200.0, color: "#f87171" });
        assert_eq!(rects[1], BarRect { x: 200.0, width: 200.0, color: "#60a5fa" });
    }

    #[test]
    fn test_over_requirement_fills_plot() {
        let foods = vec![
            FoodEntry::new("Pasta", 500.0, 3.0, 0.1),
            FoodEntry::new("Cake", 250.0, 4.0, 0.05),
        ];
        let chart = build_chart(&foods, &Requirements::default(), Nutrient::Calories);
        let rects = bar_rects(&chart, 70.0, 500.0);

        let last = rects.last().unwrap();
        assert_eq!(last.x + last.width, 570.0);
        assert_eq!(chart.fraction(chart.requirement) * 500.0, 400.0);
    }

    #[test]
    fn test_invalid_segment_skipped() {
        let foods = vec![FoodEntry::new("Soup", f64::NAN, 0.4, 0.02)];
        let chart = build_chart(&foods, &Requirements::default(), Nutrient::Proteins);
        assert!(bar_rects(&chart, 0.0, 800.0).is_empty());
    }

    #[test]
    fn test_invalid_segment_leaves_no_gap() {
        let foods = vec![
            FoodEntry::new("Soup", f64::NAN, 0.4, 0.02),
            FoodEntry::new("Pasta", 500.0, 2.0, 0.1),
        ];
        let chart = build_chart(&foods, &Requirements::default(), Nutrient::Calories);
        let rects = bar_rects(&chart, 0.0, 800.0);

        assert_eq!(rects, vec![BarRect { x: 0.0, width: 400.0, color: "#60a5fa" }]);
    }
}
