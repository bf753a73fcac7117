use dioxus::prelude::*;
use quiz_core::model::QuestionId;

use super::scripts::SEARCH_ID;
use crate::vm::{
    BrowsePageVm, ChoiceVm, FilterControlsVm, FilterEdit, NO_EXPLANATION, QuestionCardVm,
    SelectOptionVm,
};

#[component]
pub(super) fn FilterBar(
    controls: FilterControlsVm,
    on_edit: Callback<FilterEdit>,
    on_reset: Callback<()>,
    on_shuffle: Callback<()>,
    on_starred: Callback<()>,
) -> Element {
    rsx! {
        section { class: "filters",
            input {
                id: SEARCH_ID,
                class: "filters__search",
                r#type: "search",
                placeholder: "Search stems and skills ( / )",
                value: "{controls.text}",
                oninput: move |evt: FormEvent| on_edit.call(FilterEdit::Text(evt.value())),
            }
            FilterSelect {
                id: "filter-module",
                selected: controls.module.clone(),
                options: controls.modules.clone(),
                on_change: move |value: String| on_edit.call(FilterEdit::Module(value)),
            }
            FilterSelect {
                id: "filter-domain",
                selected: controls.domain.clone(),
                options: controls.domains.clone(),
                on_change: move |value: String| on_edit.call(FilterEdit::Domain(value)),
            }
            FilterSelect {
                id: "filter-difficulty",
                selected: controls.difficulty.clone(),
                options: controls.difficulties.clone(),
                on_change: move |value: String| on_edit.call(FilterEdit::Difficulty(value)),
            }
            div { class: "filters__actions",
                button { id: "filter-reset", r#type: "button", onclick: move |_| on_reset.call(()), "Reset" }
                button {
                    id: "mode-shuffle",
                    r#type: "button",
                    title: "Shuffle (r)",
                    onclick: move |_| on_shuffle.call(()),
                    "Shuffle"
                }
                button {
                    id: "mode-starred",
                    r#type: "button",
                    title: "Starred (s)",
                    onclick: move |_| on_starred.call(()),
                    "Starred"
                }
            }
        }
    }
}

#[component]
fn FilterSelect(
    id: &'static str,
    selected: String,
    options: Vec<SelectOptionVm>,
    on_change: Callback<String>,
) -> Element {
    rsx! {
        select {
            id,
            class: "filters__select",
            onchange: move |evt: FormEvent| on_change.call(evt.value()),
            for option in options {
                option {
                    key: "{option.value}",
                    value: "{option.value}",
                    selected: option.value == selected,
                    "{option.label}"
                }
            }
        }
    }
}

#[component]
pub(super) fn PageNav(page: BrowsePageVm, on_prev: Callback<()>, on_next: Callback<()>) -> Element {
    rsx! {
        nav { class: "pager",
            button {
                r#type: "button",
                disabled: !page.has_prev,
                onclick: move |_| on_prev.call(()),
                "Previous"
            }
            span { class: "pager__label", "{page.page_label}" }
            button {
                r#type: "button",
                disabled: !page.has_next,
                onclick: move |_| on_next.call(()),
                "Next"
            }
        }
    }
}

#[component]
pub(super) fn QuestionCard(
    card: QuestionCardVm,
    on_star: Callback<QuestionId>,
    on_answer: Callback<(QuestionId, usize)>,
) -> Element {
    let star_id = card.id.clone();
    let star_class = if card.starred { "star star--on" } else { "star" };

    rsx! {
        article { id: "{card.dom_id}", class: "question",
            header { class: "question__meta",
                span { class: "badge badge--module", "{card.module_label}" }
                if let Some(domain) = card.domain.clone() {
                    span { class: "badge badge--domain", "{domain}" }
                }
                span { class: "badge badge--difficulty", "{card.difficulty_label}" }
                if let Some(band) = card.score_band.clone() {
                    span { class: "badge badge--band", "Band {band}" }
                }
                button {
                    class: star_class,
                    r#type: "button",
                    aria_pressed: card.starred,
                    onclick: move |_| on_star.call(star_id.clone()),
                    "{card.star_label}"
                }
            }
            if let Some(skill) = card.skill.clone() {
                p { class: "question__skill", "{skill}" }
            }
            div { class: "question__stem", dangerous_inner_html: "{card.stem_html}" }
            if card.is_free_response() {
                p { class: "question__free", "Free response" }
            } else {
                ol { class: "choices",
                    for choice in card.choices.clone() {
                        ChoiceButton {
                            key: "{choice.index}",
                            question: card.id.clone(),
                            choice: choice.clone(),
                            on_answer,
                        }
                    }
                }
            }
            details { class: "explanation",
                summary { "Explanation" }
                if let Some(html) = card.explanation_html.clone() {
                    div { class: "explanation__body", dangerous_inner_html: "{html}" }
                } else {
                    p { class: "explanation__body muted", "{NO_EXPLANATION}" }
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(
    question: QuestionId,
    choice: ChoiceVm,
    on_answer: Callback<(QuestionId, usize)>,
) -> Element {
    let index = choice.index;

    rsx! {
        li {
            button {
                class: choice.class,
                r#type: "button",
                onclick: move |_| on_answer.call((question.clone(), index)),
                span { class: "choice__letter", "{choice.letter}" }
                span { class: "choice__body", dangerous_inner_html: "{choice.html}" }
            }
        }
    }
}
