//! Line Chart Component
//!
//! SVG line chart for the Charts view.

use leptos::prelude::*;

use crate::chart::{format_tick, nice_scale, polyline_points, ChartLayout};
use crate::context::use_app_context;
use crate::models::ChartDataset;

/// Upper bound on y axis ticks
const MAX_TICKS: usize = 11;

/// SVG coordinate attribute
fn num(v: f64) -> String {
    format!("{:.1}", v)
}

#[component]
pub fn ChartsView() -> impl IntoView {
    let ctx = use_app_context();
    let (labels, datasets) = ctx.config.with_value(|c| (c.chart.labels.clone(), c.chart.datasets.clone()));

    view! {
        <section class="view charts-view">
            <LineChart labels=labels datasets=datasets />
        </section>
    }
}

#[component]
pub fn LineChart(labels: Vec<String>, datasets: Vec<ChartDataset>) -> impl IntoView {
    let layout = ChartLayout::default();
    let scale = nice_scale(datasets.iter().flat_map(|d| d.data.iter()), MAX_TICKS);
    let count = labels.len();

    let grid_lines = scale.ticks().into_iter().map(|tick| {
        let y = layout.y_for(tick, &scale);
        view! {
            <g class="chart-tick">
                <line x1=num(layout.pad_left) x2=num(layout.width - layout.pad_right) y1=num(y) y2=num(y) />
                <text x=num(layout.pad_left - 8.0) y=num(y + 4.0) text-anchor="end">{format_tick(tick)}</text>
            </g>
        }
    }).collect_view();

    let x_labels = labels.iter().enumerate().map(|(i, label)| {
        let x = layout.x_at(i, count);
        view! {
            <text class="chart-label" x=num(x) y=num(layout.bottom() + 20.0) text-anchor="middle">{label.clone()}</text>
        }
    }).collect_view();

    let series = datasets.iter().map(|dataset| {
        let points = layout.points(&dataset.data, &scale);
        let markers = points.iter().map(|(x, y)| view! {
            <circle cx=num(*x) cy=num(*y) r="3" fill=dataset.background_color.clone() stroke=dataset.border_color.clone() />
        }).collect_view();
        let fill = if dataset.fill { dataset.background_color.clone() } else { "none".to_string() };
        view! {
            <g class="chart-series">
                <polyline
                    points=polyline_points(&points)
                    fill=fill
                    stroke=dataset.border_color.clone()
                    stroke-width="3"
                />
                {markers}
            </g>
        }
    }).collect_view();

    let legend = datasets.iter().map(|dataset| view! {
        <span class="legend-item">
            <span
                class="legend-swatch"
                style=format!("background: {}; border-color: {};", dataset.background_color, dataset.border_color)
            />
            {dataset.label.clone()}
        </span>
    }).collect_view();

    view! {
        <div class="line-chart">
            <div class="chart-legend">{legend}</div>
            <svg viewBox=format!("0 0 {} {}", layout.width, layout.height) role="img">
                {grid_lines}
                {x_labels}
                {series}
            </svg>
        </div>
    }
}
