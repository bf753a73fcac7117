use dioxus::document::eval;
use dioxus::prelude::*;
use quiz_core::model::QuestionId;
use services::{BrowseSession, SessionError};
use tracing::warn;

use super::components::{FilterBar, PageNav, QuestionCard};
use super::scripts::{
    TOAST_MILLIS, delay_script, remove_shortcut_listener_script, select_search_script,
    shortcut_listener_script,
};
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{FilterEdit, Shortcut, apply_filter_edit, map_browse_screen, shortcut_for_key};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ToastTone {
    Success,
    Warning,
    Error,
}

impl ToastTone {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Warning => "toast toast--warning",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Toast {
    seq: u64,
    message: &'static str,
    tone: ToastTone,
}

#[component]
pub fn BrowseView() -> Element {
    let ctx = use_context::<AppContext>();
    let services = ctx.services();

    let mut session = use_signal(|| None::<BrowseSession>);
    let mut toast = use_signal(|| None::<Toast>);
    let mut toast_seq = use_signal(|| 0_u64);

    let mut resource = use_resource(move || {
        let services = services.clone();
        async move {
            let loaded = services.start_session().await.map_err(|err| {
                warn!(error = %err, "could not load questions");
                ViewError::CorpusUnavailable
            })?;
            session.set(Some(loaded));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(resource);

    let show_toast = use_callback(move |(message, tone): (&'static str, ToastTone)| {
        let seq = toast_seq() + 1;
        toast_seq.set(seq);
        toast.set(Some(Toast { seq, message, tone }));
        spawn(async move {
            let mut delay = eval(&delay_script(TOAST_MILLIS));
            let _ = delay.recv::<bool>().await;
            if toast.peek().is_some_and(|current| current.seq == seq) {
                toast.set(None);
            }
        });
    });

    let on_edit = use_callback(move |edit: FilterEdit| {
        if let Some(active) = session.write().as_mut() {
            let next = apply_filter_edit(active.criteria(), edit);
            active.apply_filter(next);
        }
    });
    let on_reset = use_callback(move |()| {
        if let Some(active) = session.write().as_mut() {
            active.reset_filters();
        }
    });
    let on_prev = use_callback(move |()| {
        if let Some(active) = session.write().as_mut() {
            active.prev_page();
        }
    });
    let on_next = use_callback(move |()| {
        if let Some(active) = session.write().as_mut() {
            active.next_page();
        }
    });
    let on_shuffle = use_callback(move |()| {
        if let Some(active) = session.write().as_mut() {
            active.shuffle();
        }
    });
    let on_starred = use_callback(move |()| {
        if let Some(active) = session.write().as_mut() {
            active.show_starred();
        }
    });

    let on_star = use_callback(move |id: QuestionId| {
        let result = session.write().as_mut().map(|active| active.toggle_star(&id));
        if let Some(Err(err)) = result {
            warn!(question = %id, error = %err, "star toggle failed");
            show_toast.call(("Could not save starred questions.", ToastTone::Error));
        }
    });

    let on_answer = use_callback(move |(id, choice): (QuestionId, usize)| {
        let result = session.write().as_mut().map(|active| active.answer(&id, choice));
        match result {
            Some(Ok(outcome)) if outcome.correct => {
                show_toast.call(("Correct!", ToastTone::Success));
            }
            Some(Ok(_)) => show_toast.call(("Not quite. Try another choice.", ToastTone::Warning)),
            Some(Err(SessionError::Storage(err))) => {
                warn!(question = %id, error = %err, "attempt not saved");
                show_toast.call(("Answer checked, but history could not be saved.", ToastTone::Error));
            }
            Some(Err(err)) => warn!(question = %id, error = %err, "answer rejected"),
            None => {}
        }
    });

    use_future(move || async move {
        let mut keys = eval(&shortcut_listener_script());
        while let Ok(key) = keys.recv::<String>().await {
            match shortcut_for_key(&key) {
                Some(Shortcut::FocusSearch) => {
                    let _ = eval(&select_search_script());
                }
                Some(Shortcut::Shuffle) => on_shuffle.call(()),
                Some(Shortcut::ShowStarred) => on_starred.call(()),
                None => {}
            }
        }
    });
    use_drop(|| {
        let _ = eval(&remove_shortcut_listener_script());
    });

    let screen = session.read().as_ref().map(map_browse_screen);

    rsx! {
        div { class: "page page--browse",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "status", "Loading questions..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "error-state",
                        p { "{err.message()}" }
                        button {
                            id: "browse-retry",
                            r#type: "button",
                            onclick: move |_| resource.restart(),
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(()) => match screen {
                    None => rsx! {
                        p { class: "status", "Loading questions..." }
                    },
                    Some(screen) => rsx! {
                        FilterBar {
                            controls: screen.controls.clone(),
                            on_edit,
                            on_reset,
                            on_shuffle,
                            on_starred,
                        }
                        div { class: "summary",
                            span { class: "summary__mode", "{screen.page.mode_label}" }
                            span { class: "summary__count", "{screen.page.count_label}" }
                        }
                        if let Some(message) = screen.page.empty_message {
                            p { class: "empty-state", "{message}" }
                        }
                        for card in screen.page.cards.clone() {
                            QuestionCard { key: "{card.dom_id}", card: card.clone(), on_star, on_answer }
                        }
                        PageNav { page: screen.page.clone(), on_prev, on_next }
                    },
                },
            }

            if let Some(current) = toast() {
                div { class: current.tone.class(), role: "status", "{current.message}" }
            }
        }
    }
}
