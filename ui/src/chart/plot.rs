//! The main glucose line chart, rendered as inline SVG.

use dioxus::prelude::*;

use crate::core::{format, series::Reading};

use super::scale::{self, LinearScale};
use super::{CHART_WIDTH, INNER_WIDTH, MARGIN_LEFT, MARGIN_RIGHT};

const CHART_HEIGHT: f64 = 400.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 36.0;
const INNER_HEIGHT: f64 = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

const SERIES_COLOR: &str = "teal";
const BOUNDARY_COLOR: &str = "gray";

const TOOLTIP_WIDTH: f64 = 200.0;
const TOOLTIP_HEIGHT: f64 = 52.0;

struct Tooltip {
    x: f64,
    y: f64,
    box_x: f64,
    timestamp: String,
    value: String,
}

#[component]
pub fn GlucosePlot(readings: Vec<Reading>) -> Element {
    let mut hover = use_signal(|| None::<usize>);

    if readings.is_empty() {
        return rsx! {
            div { class: "chart-plot chart-plot--empty",
                p { class: "chart-plot__placeholder",
                    "Upload a CSV file to plot readings here."
                }
            }
        };
    }

    let count = readings.len();
    let peak = readings
        .iter()
        .map(|r| r.glucose)
        .fold(f64::MIN, f64::max);
    let y_scale = LinearScale::new(
        (0.0, peak * 1.05),
        (MARGIN_TOP + INNER_HEIGHT, MARGIN_TOP),
    );

    let values: Vec<f64> = readings.iter().map(|r| r.glucose).collect();
    let points = scale::polyline_points(&values, &y_scale, INNER_WIDTH);

    let dots: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, v)| (scale::x_position(i, count, INNER_WIDTH), y_scale.position(*v)))
        .collect();

    // Dashed separators on the last reading before each day change.
    let boundaries: Vec<f64> = readings
        .iter()
        .enumerate()
        .filter(|(_, r)| r.day_boundary)
        .map(|(i, _)| scale::x_position(i, count, INNER_WIDTH))
        .collect();

    let y_ticks: Vec<(f64, String)> = y_scale
        .ticks(5)
        .into_iter()
        .map(|v| (y_scale.position(v), format::format_number(v, 0)))
        .collect();

    let x_tick_step = count.div_ceil(8).max(1);
    let x_ticks: Vec<(f64, String)> = readings
        .iter()
        .enumerate()
        .step_by(x_tick_step)
        .map(|(i, r)| {
            let label: String = r.timestamp.chars().take(16).collect();
            (scale::x_position(i, count, INNER_WIDTH), label)
        })
        .collect();

    let tooltip = hover().and_then(|index| {
        readings.get(index).map(|reading| {
            let x = scale::x_position(index, count, INNER_WIDTH);
            let y = y_scale.position(reading.glucose);
            // Flip the box to the left of the cursor near the right edge.
            let box_x = if x + TOOLTIP_WIDTH + 16.0 > INNER_WIDTH {
                x - TOOLTIP_WIDTH - 12.0
            } else {
                x + 12.0
            };
            Tooltip {
                x,
                y,
                box_x,
                timestamp: reading.timestamp.clone(),
                value: format::format_glucose(reading.glucose),
            }
        })
    });

    rsx! {
        div { class: "chart-plot",
            svg {
                class: "chart-plot__svg",
                width: "{CHART_WIDTH}",
                height: "{CHART_HEIGHT}",
                view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                role: "img",
                "aria-label": "Glucose readings over time",
                onmousemove: move |evt| {
                    let x = evt.element_coordinates().x - MARGIN_LEFT;
                    hover.set(Some(scale::nearest_index(x, count, INNER_WIDTH)));
                },
                onmouseleave: move |_| hover.set(None),

                // Horizontal grid + y axis labels
                for (y, label) in y_ticks.iter() {
                    line {
                        x1: "{MARGIN_LEFT}",
                        y1: "{y}",
                        x2: "{CHART_WIDTH - MARGIN_RIGHT}",
                        y2: "{y}",
                        class: "chart-plot__grid",
                    }
                    text {
                        x: "{MARGIN_LEFT - 8.0}",
                        y: "{y + 4.0}",
                        text_anchor: "end",
                        class: "chart-plot__tick-label",
                        "{label}"
                    }
                }

                // X axis baseline + timestamp labels
                line {
                    x1: "{MARGIN_LEFT}",
                    y1: "{MARGIN_TOP + INNER_HEIGHT}",
                    x2: "{CHART_WIDTH - MARGIN_RIGHT}",
                    y2: "{MARGIN_TOP + INNER_HEIGHT}",
                    class: "chart-plot__axis",
                }
                for (x, label) in x_ticks.iter() {
                    text {
                        x: "{MARGIN_LEFT + x}",
                        y: "{MARGIN_TOP + INNER_HEIGHT + 20.0}",
                        text_anchor: "middle",
                        class: "chart-plot__tick-label",
                        "{label}"
                    }
                }

                g { transform: "translate({MARGIN_LEFT}, 0)",
                    // Day separators
                    for x in boundaries.iter() {
                        line {
                            x1: "{x}",
                            y1: "{MARGIN_TOP}",
                            x2: "{x}",
                            y2: "{MARGIN_TOP + INNER_HEIGHT}",
                            stroke: BOUNDARY_COLOR,
                            stroke_dasharray: "3 3",
                            class: "chart-plot__boundary",
                        }
                    }

                    polyline {
                        points: "{points}",
                        fill: "none",
                        stroke: SERIES_COLOR,
                        stroke_width: "2",
                    }
                    for (x, y) in dots.iter() {
                        circle {
                            cx: "{x}",
                            cy: "{y}",
                            r: "2.5",
                            fill: SERIES_COLOR,
                        }
                    }

                    if let Some(tip) = tooltip.as_ref() {
                        line {
                            x1: "{tip.x}",
                            y1: "{MARGIN_TOP}",
                            x2: "{tip.x}",
                            y2: "{MARGIN_TOP + INNER_HEIGHT}",
                            class: "chart-plot__cursor",
                        }
                        circle {
                            cx: "{tip.x}",
                            cy: "{tip.y}",
                            r: "4",
                            class: "chart-plot__cursor-dot",
                        }
                        g { class: "chart-plot__tooltip",
                            rect {
                                x: "{tip.box_x}",
                                y: "{MARGIN_TOP + 8.0}",
                                width: "{TOOLTIP_WIDTH}",
                                height: "{TOOLTIP_HEIGHT}",
                                rx: "6",
                            }
                            text {
                                x: "{tip.box_x + 10.0}",
                                y: "{MARGIN_TOP + 28.0}",
                                class: "chart-plot__tooltip-label",
                                "DATE AND TIME  {tip.timestamp}"
                            }
                            text {
                                x: "{tip.box_x + 10.0}",
                                y: "{MARGIN_TOP + 48.0}",
                                class: "chart-plot__tooltip-value",
                                "GLUCOSE  {tip.value}"
                            }
                        }
                    }
                }
            }

            div { class: "chart-plot__legend",
                span { class: "chart-plot__legend-swatch" }
                span { "Glucose level" }
            }
        }
    }
}
