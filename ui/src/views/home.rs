//! The single page: CSV upload, glucose chart with brush, daily statistics.

use dioxus::prelude::*;

use crate::chart::{BrushStrip, DailyStatsTable, GlucosePlot};
use crate::core::ingest;
use crate::core::series::{aggregate, GlucoseSeries, SelectedRange};
use crate::t;

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so the page
    // re-renders immediately when the locale changes in the navbar.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut series = use_signal(GlucoseSeries::default);
    let mut selected = use_signal(|| None::<SelectedRange>);

    let on_upload = move |evt: FormEvent| {
        let Some(file_engine) = evt.files() else {
            return;
        };
        let names = file_engine.files();
        let Some(name) = names.first().cloned() else {
            return;
        };
        spawn(async move {
            if let Some(contents) = file_engine.read_file_to_string(&name).await {
                let rows = ingest::parse_rows(&contents);
                let next = aggregate(&rows);

                #[cfg(debug_assertions)]
                println!(
                    "[ingest] {name}: {} rows -> {} readings across {} days",
                    rows.len(),
                    next.readings.len(),
                    next.daily.len()
                );

                selected.set(None);
                series.set(next);
            }
        });
    };

    let on_reset = move |_| {
        // A reload discards everything; native builds just clear state.
        if !reload_page() {
            series.set(GlucoseSeries::default());
            selected.set(None);
        }
    };

    let on_brush = move |(lo, hi): (usize, usize)| {
        let range = series.with(|s| {
            let start = s.readings.get(lo)?;
            let end = s.readings.get(hi)?;
            Some(SelectedRange {
                start: start.day.clone(),
                end: end.day.clone(),
            })
        });
        selected.set(range);
    };

    let snapshot = series();
    let range_line = selected().map(|r| t!("range-label", start = r.start, end = r.end));

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-home",
            div { class: "page-home__cards",
                section { class: "card card--chart",
                    header { class: "card__header",
                        h2 { class: "card__title", {t!("chart-card-title")} }
                        div { class: "card__upload",
                            label {
                                class: "visually-hidden",
                                r#for: "csv-file",
                                {t!("upload-label")}
                            }
                            input {
                                id: "csv-file",
                                r#type: "file",
                                accept: ".csv",
                                onchange: on_upload,
                            }
                        }
                    }

                    div { class: "card__body",
                        if let Some(range) = range_line {
                            p { class: "card__range", "{range}" }
                        } else {
                            p { class: "card__range card__range--empty", "\u{00a0}" }
                        }

                        GlucosePlot { readings: snapshot.readings.clone() }
                        BrushStrip {
                            readings: snapshot.readings.clone(),
                            on_change: on_brush,
                        }
                    }

                    footer { class: "card__footer",
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            onclick: on_reset,
                            {t!("reset-label")}
                        }
                    }
                }

                section { class: "card card--stats",
                    header { class: "card__header",
                        h2 { class: "card__title", {t!("stats-card-title")} }
                    }
                    div { class: "card__body",
                        DailyStatsTable { daily: snapshot.daily.clone() }
                    }
                }
            }

            footer { class: "page-home__footer",
                p { {t!("footer-note")} }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn reload_page() -> bool {
    web_sys::window()
        .map(|window| window.location().reload().is_ok())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn reload_page() -> bool {
    false
}
