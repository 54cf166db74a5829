//! Brush strip: a miniature of the series where a pointer drag selects a
//! sub-range of readings.
//!
//! The component only reports `(start_index, end_index)` through `on_change`;
//! turning that into a displayed date range is the page's job, keeping the
//! selection purely a display concern.

use dioxus::prelude::*;

use crate::core::series::Reading;

use super::scale::{self, LinearScale};
use super::{CHART_WIDTH, INNER_WIDTH, MARGIN_LEFT};

const STRIP_HEIGHT: f64 = 56.0;
const STRIP_PAD: f64 = 8.0;

#[component]
pub fn BrushStrip(readings: Vec<Reading>, on_change: EventHandler<(usize, usize)>) -> Element {
    let mut anchor = use_signal(|| None::<usize>);
    let mut selection = use_signal(|| None::<(usize, usize)>);

    if readings.len() < 2 {
        return rsx! {};
    }

    let count = readings.len();
    let peak = readings
        .iter()
        .map(|r| r.glucose)
        .fold(f64::MIN, f64::max);
    let y_scale = LinearScale::new((0.0, peak), (STRIP_HEIGHT - STRIP_PAD, STRIP_PAD));

    let values: Vec<f64> = readings.iter().map(|r| r.glucose).collect();
    let points = scale::polyline_points(&values, &y_scale, INNER_WIDTH);

    let window = selection().map(|(lo, hi)| {
        (
            scale::x_position(lo, count, INNER_WIDTH),
            scale::x_position(hi, count, INNER_WIDTH),
        )
    });

    let index_at = move |evt: &MouseData| {
        scale::nearest_index(evt.element_coordinates().x - MARGIN_LEFT, count, INNER_WIDTH)
    };

    rsx! {
        svg {
            class: "chart-brush",
            width: "{CHART_WIDTH}",
            height: "{STRIP_HEIGHT}",
            view_box: "0 0 {CHART_WIDTH} {STRIP_HEIGHT}",
            "aria-label": "Select a date range",
            onmousedown: move |evt| {
                let index = index_at(&evt);
                anchor.set(Some(index));
                selection.set(Some((index, index)));
                on_change.call((index, index));
            },
            onmousemove: move |evt| {
                if let Some(origin) = anchor() {
                    let index = index_at(&evt);
                    let range = (origin.min(index), origin.max(index));
                    selection.set(Some(range));
                    on_change.call(range);
                }
            },
            onmouseup: move |_| anchor.set(None),
            onmouseleave: move |_| anchor.set(None),

            g { transform: "translate({MARGIN_LEFT}, 0)",
                rect {
                    x: "0",
                    y: "0",
                    width: "{INNER_WIDTH}",
                    height: "{STRIP_HEIGHT}",
                    class: "chart-brush__backdrop",
                }
                polyline {
                    points: "{points}",
                    fill: "none",
                    stroke: "teal",
                    stroke_width: "1",
                }
                if let Some((x_lo, x_hi)) = window {
                    rect {
                        x: "{x_lo}",
                        y: "0",
                        width: "{(x_hi - x_lo).max(1.0)}",
                        height: "{STRIP_HEIGHT}",
                        class: "chart-brush__window",
                    }
                    line {
                        x1: "{x_lo}",
                        y1: "0",
                        x2: "{x_lo}",
                        y2: "{STRIP_HEIGHT}",
                        class: "chart-brush__traveller",
                    }
                    line {
                        x1: "{x_hi}",
                        y1: "0",
                        x2: "{x_hi}",
                        y2: "{STRIP_HEIGHT}",
                        class: "chart-brush__traveller",
                    }
                }
            }
        }
    }
}
