//! Chart Components
//!
//! Monthly line/bar charts and the plan pie chart, drawn on HTML5 Canvas.

use std::f64::consts::PI;

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND: &str = "#111827"; // gray-900
const GRID: &str = "#374151"; // gray-700
const AXIS_TEXT: &str = "#9ca3af"; // gray-400

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 60.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;
const GRID_LINES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Bar,
}

/// One plotted series over the shared month labels
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub kind: SeriesKind,
    /// Scaled against its own range and labelled on the right axis
    pub secondary: bool,
    pub values: Vec<f64>,
}

/// A pie slice
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub color: &'static str,
    pub fraction: f64,
}

/// Line/bar chart over month labels
#[component]
pub fn SeriesChart(labels: Vec<&'static str>, series: Vec<Series>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend = series.iter().map(|s| (s.name.to_string(), s.color)).collect::<Vec<_>>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_series(&canvas, &labels, &series);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="320"
                class="w-full h-64 rounded-lg"
            />
            <Legend entries=legend />
        </div>
    }
}

/// Pie chart with a legend of slice labels
#[component]
pub fn PieChart(slices: Vec<Slice>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend = slices.iter().map(|s| (s.label.clone(), s.color)).collect::<Vec<_>>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &slices);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="320"
                height="320"
                class="w-64 h-64 mx-auto"
            />
            <Legend entries=legend />
        </div>
    }
}

#[component]
fn Legend(entries: Vec<(String, &'static str)>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {entries.into_iter().map(|(label, color)| view! {
                <div class="flex items-center space-x-2">
                    <div
                        class="w-3 h-3 rounded-full"
                        style=format!("background-color: {}", color)
                    />
                    <span class="text-sm text-gray-300">{label}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

/// Padded min/max for a set of values
fn value_range(values: &[f64]) -> (f64, f64) {
    let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    // Bars need a zero baseline
    min = min.min(0.0);
    let padding = if max > min { (max - min) * 0.1 } else { 1.0 };
    max += padding;

    (min, max)
}

/// Canvas y for `value` (canvas y grows downward)
fn scale_y(value: f64, range: (f64, f64), chart_height: f64) -> f64 {
    let (min, max) = range;
    MARGIN_TOP + ((max - value) / (max - min)) * chart_height
}

/// Centre x of slot `index` out of `count`
fn slot_x(index: usize, count: usize, chart_width: f64) -> f64 {
    let slot = chart_width / count.max(1) as f64;
    MARGIN_LEFT + slot * (index as f64 + 0.5)
}

/// Start and end angle of each slice, starting at twelve o'clock
fn slice_angles(fractions: &[f64]) -> Vec<(f64, f64)> {
    let mut start = -PI / 2.0;
    fractions
        .iter()
        .map(|fraction| {
            let end = start + fraction * 2.0 * PI;
            let angles = (start, end);
            start = end;
            angles
        })
        .collect()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_series(canvas: &HtmlCanvasElement, labels: &[&str], series: &[Series]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let primary: Vec<f64> = series
        .iter()
        .filter(|s| !s.secondary)
        .flat_map(|s| s.values.iter().copied())
        .collect();
    let primary_range = value_range(&primary);

    // Grid and left axis
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=GRID_LINES {
        let y = MARGIN_TOP + (i as f64 / GRID_LINES as f64) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = primary_range.1
            - (i as f64 / GRID_LINES as f64) * (primary_range.1 - primary_range.0);
        ctx.set_fill_style(&AXIS_TEXT.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let bar_series = series.iter().filter(|s| s.kind == SeriesKind::Bar).count().max(1);
    let slot = chart_width / labels.len().max(1) as f64;
    let bar_width = slot * 0.7 / bar_series as f64;
    let mut bar_index = 0;

    for s in series {
        let range = if s.secondary {
            value_range(&s.values)
        } else {
            primary_range
        };
        ctx.set_fill_style(&s.color.into());
        ctx.set_stroke_style(&s.color.into());

        match s.kind {
            SeriesKind::Bar => {
                let baseline = scale_y(range.0.max(0.0), range, chart_height);
                for (i, value) in s.values.iter().enumerate() {
                    let left = slot_x(i, labels.len(), chart_width) - slot * 0.35
                        + bar_index as f64 * bar_width;
                    let top = scale_y(*value, range, chart_height);
                    ctx.fill_rect(left, top, bar_width, baseline - top);
                }
                bar_index += 1;
            }
            SeriesKind::Line => {
                ctx.set_line_width(2.0);
                ctx.begin_path();
                for (i, value) in s.values.iter().enumerate() {
                    let x = slot_x(i, labels.len(), chart_width);
                    let y = scale_y(*value, range, chart_height);
                    if i == 0 {
                        ctx.move_to(x, y);
                    } else {
                        ctx.line_to(x, y);
                    }
                }
                ctx.stroke();

                for (i, value) in s.values.iter().enumerate() {
                    ctx.begin_path();
                    let _ = ctx.arc(
                        slot_x(i, labels.len(), chart_width),
                        scale_y(*value, range, chart_height),
                        3.0,
                        0.0,
                        PI * 2.0,
                    );
                    ctx.fill();
                }
            }
        }

        if s.secondary {
            ctx.set_fill_style(&s.color.into());
            for i in 0..=GRID_LINES {
                let y = MARGIN_TOP + (i as f64 / GRID_LINES as f64) * chart_height;
                let value = range.1 - (i as f64 / GRID_LINES as f64) * (range.1 - range.0);
                let _ = ctx.fill_text(&format!("{:.0}", value), width - MARGIN_RIGHT + 8.0, y + 4.0);
            }
        }
    }

    // Month labels
    ctx.set_fill_style(&AXIS_TEXT.into());
    for (i, label) in labels.iter().enumerate() {
        let _ = ctx.fill_text(label, slot_x(i, labels.len(), chart_width) - 10.0, height - 10.0);
    }
}

fn draw_pie(canvas: &HtmlCanvasElement, slices: &[Slice]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = width.min(height) / 2.0 - 10.0;

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let fractions: Vec<f64> = slices.iter().map(|s| s.fraction).collect();
    for (slice, (start, end)) in slices.iter().zip(slice_angles(&fractions)) {
        ctx.set_fill_style(&slice.color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();
    }
}
