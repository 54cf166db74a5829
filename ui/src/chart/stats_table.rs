//! Daily statistics table: one row per calendar day.

use dioxus::prelude::*;

use crate::core::{format, series::DailyStats};

#[component]
pub fn DailyStatsTable(daily: Vec<DailyStats>) -> Element {
    rsx! {
        div { class: "stats-table",
            if daily.is_empty() {
                p { class: "stats-table__placeholder",
                    "Per-day peak, low and average values will appear here."
                }
            } else {
                table {
                    thead {
                        tr {
                            th { "Date" }
                            th { "Peak" }
                            th { "Low" }
                            th { "Average" }
                        }
                    }
                    tbody {
                        for stat in daily.iter() {
                            tr { key: "{stat.day}",
                                td { "{stat.day}" }
                                td { "{format::format_glucose(stat.peak)}" }
                                td { "{format::format_glucose(stat.low)}" }
                                td { "{format::format_average(stat.average)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
