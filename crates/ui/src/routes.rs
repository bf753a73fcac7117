use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{BrowseView, HistoryView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", BrowseView)] Browse {},
        #[route("/history", HistoryView)] History {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "{ctx.app_name()}" }
                nav {
                    Link { to: Route::Browse {}, "Questions" }
                    Link { to: Route::History {}, "History" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
