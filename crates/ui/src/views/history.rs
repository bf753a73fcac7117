use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{HistoryRowVm, map_history_rows};

/// Attempts shown on the history page, newest first.
pub const HISTORY_ROWS: usize = 50;

#[derive(Clone, Debug, PartialEq)]
struct HistoryData {
    rows: Vec<HistoryRowVm>,
    correct: usize,
}

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let services = ctx.services();

    let resource = use_resource(move || {
        let services = services.clone();
        async move {
            let attempts = services.recent_attempts(HISTORY_ROWS);
            let correct = attempts.iter().filter(|attempt| attempt.correct).count();
            Ok::<_, ViewError>(HistoryData {
                rows: map_history_rows(&attempts),
                correct,
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page page--history",
            h2 { "History" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.rows.is_empty() {
                        p { class: "empty-state", "No attempts yet." }
                        Link { to: Route::Browse {}, "Start answering questions" }
                    } else {
                        p { class: "history__summary",
                            "{data.correct} correct out of the last {data.rows.len()} attempts"
                        }
                        ul { class: "history",
                            for row in data.rows {
                                AttemptRow { row }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn AttemptRow(row: HistoryRowVm) -> Element {
    rsx! {
        li { class: "history__row",
            span { class: "history__id", "{row.question_id}" }
            span { class: row.outcome_class, "{row.outcome_label}" }
            span { class: "history__time", "{row.answered_at_str}" }
        }
    }
}
