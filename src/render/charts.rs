//! Inline SVG charts.

use super::html::{GRAY, GREEN, LIGHT_BLUE, escape};
use crate::models::{ChartSeries, ImprovementPlan};
use std::f64::consts::PI;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// One bar series: legend name, colour and values.
pub struct BarSeries<'a> {
    pub name: &'a str,
    pub color: &'a str,
    pub values: &'a [f64],
}

/// Grouped bar chart with value labels above each bar.
pub fn grouped_bar_chart(title: &str, labels: &[String], series: &[BarSeries<'_>]) -> String {
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .filter(|v| v.is_finite())
        .fold(1.0, f64::max);

    let groups = labels.len().max(1) as f64;
    let group_width = plot_width / groups;
    let bars = series.len().max(1) as f64;
    let bar_width = group_width * 0.8 / bars;
    let baseline = MARGIN_TOP + plot_height;

    let mut svg = format!(
        r#"<svg class="chart" viewBox="0 0 {w} {h}" width="100%" role="img" aria-label="{title}" xmlns="http://www.w3.org/2000/svg">"#,
        w = WIDTH,
        h = HEIGHT,
        title = escape(title),
    );
    svg.push_str(&format!(
        r#"<text x="{x}" y="22" text-anchor="middle" font-size="16" font-weight="600">{title}</text>"#,
        x = WIDTH / 2.0,
        title = escape(title),
    ));
    svg.push_str(&format!(
        r##"<line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="#94a3b8"/>"##,
        l = MARGIN_LEFT,
        r = WIDTH - MARGIN_RIGHT,
        b = baseline,
    ));

    for (g, label) in labels.iter().enumerate() {
        let group_x = MARGIN_LEFT + group_width * g as f64 + group_width * 0.1;
        for (s, bar) in series.iter().enumerate() {
            let value = bar.values.get(g).copied().filter(|v| v.is_finite()).unwrap_or(0.0);
            let value = value.max(0.0);
            let height = value / max * plot_height;
            let x = group_x + bar_width * s as f64;
            let y = baseline - height;
            svg.push_str(&format!(
                r#"<rect x="{x:.1}" y="{y:.1}" width="{bw:.1}" height="{height:.1}" fill="{color}"><title>{name}: {value}</title></rect>"#,
                value = value_label(value),
                bw = bar_width,
                color = escape(bar.color),
                name = escape(bar.name),
            ));
            svg.push_str(&format!(
                r#"<text x="{cx:.1}" y="{ty:.1}" text-anchor="middle" font-size="11">{value}</text>"#,
                value = value_label(value),
                cx = x + bar_width / 2.0,
                ty = y - 4.0,
            ));
        }
        svg.push_str(&format!(
            r#"<text x="{cx:.1}" y="{ly:.1}" text-anchor="middle" font-size="12">{label}</text>"#,
            cx = MARGIN_LEFT + group_width * (g as f64 + 0.5),
            ly = baseline + 18.0,
            label = escape(label),
        ));
    }

    for (s, bar) in series.iter().enumerate() {
        let x = MARGIN_LEFT + 180.0 * s as f64;
        let y = HEIGHT - 18.0;
        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{ry:.1}" width="12" height="12" fill="{color}"/><text x="{tx:.1}" y="{y:.1}" font-size="12">{name}</text>"#,
            ry = y - 10.0,
            tx = x + 18.0,
            color = escape(bar.color),
            name = escape(bar.name),
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Whole numbers print without decimals, anything else with one.
fn value_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn as_f64(values: &[u64]) -> Vec<f64> {
    values.iter().map(|&v| v as f64).collect()
}

/// Synthea vs OMOP bars for the comparison page.
pub fn comparison_chart(chart: &ChartSeries, source_color: &str, target_color: &str) -> String {
    let synthea = as_f64(&chart.synthea);
    let omop = as_f64(&chart.omop);
    grouped_bar_chart(
        "Record comparison: Synthea → OMOP",
        &chart.labels,
        &[
            BarSeries {
                name: "Synthea (source)",
                color: source_color,
                values: &synthea,
            },
            BarSeries {
                name: "OMOP (target)",
                color: target_color,
                values: &omop,
            },
        ],
    )
}

/// Current vs target coverage per category, in percent.
pub fn improvement_plan_chart(plan: &ImprovementPlan) -> String {
    grouped_bar_chart(
        "Progress vs mapping targets (% concepts mapped)",
        &plan.labels,
        &[
            BarSeries {
                name: "Current",
                color: LIGHT_BLUE,
                values: &plan.current,
            },
            BarSeries {
                name: "Target",
                color: GREEN,
                values: &plan.target,
            },
        ],
    )
}

/// Donut of mapped vs unmapped concepts; `rate` is clamped to `[0, 1]`.
pub fn coverage_donut(title: &str, rate: f64) -> String {
    let rate = if rate.is_finite() { rate.clamp(0.0, 1.0) } else { 0.0 };
    let radius = 80.0;
    let circumference = 2.0 * PI * radius;
    let mapped = circumference * rate;

    format!(
        r#"<svg class="chart" viewBox="0 0 400 260" width="400" role="img" aria-label="{title}" xmlns="http://www.w3.org/2000/svg">
  <text x="200" y="22" text-anchor="middle" font-size="16" font-weight="600">{title}</text>
  <circle cx="200" cy="140" r="{radius}" fill="none" stroke="{gray}" stroke-width="30"/>
  <circle cx="200" cy="140" r="{radius}" fill="none" stroke="{green}" stroke-width="30"
          stroke-dasharray="{mapped:.2} {circumference:.2}" transform="rotate(-90 200 140)"/>
  <text x="200" y="146" text-anchor="middle" font-size="20" font-weight="600">{mapped_pct:.1}%</text>
  <text x="20" y="250" font-size="12" fill="{green}">Mapped {mapped_pct:.1}%</text>
  <text x="250" y="250" font-size="12" fill="{gray}">Unmapped {unmapped_pct:.1}%</text>
</svg>"#,
        title = escape(title),
        gray = GRAY,
        green = GREEN,
        mapped_pct = rate * 100.0,
        unmapped_pct = (1.0 - rate) * 100.0,
    )
}
