use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::time::fixed_clock;
use services::{BrowserConfig, BrowserServices, StaticCorpusSource};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{BrowseView, HistoryView};

pub const ROOT: &str = "https://quiz.test/data/";

struct TestApp {
    services: Arc<BrowserServices>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Question Bank"
    }

    fn browser_services(&self) -> Arc<BrowserServices> {
        Arc::clone(&self.services)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Browse,
    History,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Browse => rsx! { BrowseView {} },
        ViewKind::History => rsx! { HistoryView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let resources resolve and re-render.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// A chunk of `count` math/reading questions with ids `q000..`.
pub fn chunk_json(start: usize, count: usize) -> String {
    let records: Vec<String> = (start..start + count)
        .map(|i| {
            let module = if i % 2 == 0 { "math" } else { "reading-writing" };
            format!(
                r#"{{"uId":"q{i:03}","module":"{module}","difficulty":"E","primary_class_cd_desc":"Domain {module}",
                    "stem":"<p>Stem {i}</p>","choices":["<b>one</b>","two"],"correct_choice_index":0}}"#
            )
        })
        .collect();
    format!("[{}]", records.join(","))
}

/// Manifest with one chunk of `count` questions.
pub fn corpus_source(count: usize) -> StaticCorpusSource {
    StaticCorpusSource::new()
        .with(
            &format!("{ROOT}manifest.json"),
            r#"{"version":1,"chunks":[{"path":"chunks/part-0.json"}]}"#,
        )
        .with(&format!("{ROOT}chunks/part-0.json"), chunk_json(0, count))
}

pub fn setup_view_harness(view: ViewKind, source: StaticCorpusSource) -> ViewHarness {
    setup_view_harness_with_storage(view, source, Storage::in_memory())
}

pub fn setup_view_harness_with_storage(
    view: ViewKind,
    source: StaticCorpusSource,
    storage: Storage,
) -> ViewHarness {
    let config = BrowserConfig::from_root_str(ROOT).expect("test root");
    let services = BrowserServices::new(config, Arc::new(source), storage.clone(), fixed_clock());
    let app = Arc::new(TestApp {
        services: Arc::new(services),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, storage }
}
