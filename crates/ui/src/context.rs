use std::sync::Arc;

use services::BrowserServices;

/// Implemented by the composition root (`crates/app`) to hand services to the UI.
pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn browser_services(&self) -> Arc<BrowserServices>;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    services: Arc<BrowserServices>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name().to_string(),
            services: app.browser_services(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn services(&self) -> Arc<BrowserServices> {
        Arc::clone(&self.services)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
