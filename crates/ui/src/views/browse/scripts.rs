use crate::vm::Shortcut;

pub(super) const SEARCH_ID: &str = "browse-search";

/// How long a confirmation toast stays visible.
pub(super) const TOAST_MILLIS: u32 = 1800;

/// Global slot holding the installed keydown handler, so it can be replaced or removed.
const SHORTCUT_SLOT: &str = "__quizBrowseShortcuts";

pub(super) fn select_search_script() -> String {
    format!(
        r#"(function() {{
                const el = document.getElementById({SEARCH_ID:?});
                if (el) {{
                    el.focus();
                    el.select();
                }}
            }})();"#
    )
}

/// Sends `true` back after `millis`.
pub(super) fn delay_script(millis: u32) -> String {
    format!("await new Promise((resolve) => setTimeout(resolve, {millis})); dioxus.send(true);")
}

/// Installs a document-level keydown listener that sends each shortcut key
/// back as a string. Keys typed into form controls or editable content, and
/// chords with Ctrl, Alt or Meta, are left alone. `/` is prevented so it never
/// reaches the page.
pub(super) fn shortcut_listener_script() -> String {
    let keys: Vec<&str> = Shortcut::ALL.iter().map(|shortcut| shortcut.key()).collect();
    let focus_key = Shortcut::FocusSearch.key();
    format!(
        r#"if (window.{SHORTCUT_SLOT}) {{
                document.removeEventListener("keydown", window.{SHORTCUT_SLOT});
            }}
            const keys = {keys:?};
            window.{SHORTCUT_SLOT} = (event) => {{
                if (event.ctrlKey || event.altKey || event.metaKey) return;
                const target = event.target;
                const tag = target && target.tagName ? target.tagName.toLowerCase() : "";
                if (tag === "input" || tag === "textarea" || tag === "select") return;
                if (target && target.isContentEditable) return;
                if (!keys.includes(event.key)) return;
                if (event.key === {focus_key:?}) event.preventDefault();
                dioxus.send(event.key);
            }};
            document.addEventListener("keydown", window.{SHORTCUT_SLOT});
            await new Promise(() => {{}});"#
    )
}

pub(super) fn remove_shortcut_listener_script() -> String {
    format!(
        r#"if (window.{SHORTCUT_SLOT}) {{
                document.removeEventListener("keydown", window.{SHORTCUT_SLOT});
                window.{SHORTCUT_SLOT} = undefined;
            }}"#
    )
}
