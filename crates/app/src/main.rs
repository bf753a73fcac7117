use std::sync::Arc;

use dioxus::LaunchBuilder;
use services::{BrowserConfig, BrowserServices};
use storage::repository::Storage;
use tracing::Level;
use ui::{App, UiApp, build_app_context};

const APP_NAME: &str = "Question Bank";

struct QuizApp {
    services: Arc<BrowserServices>,
}

impl UiApp for QuizApp {
    fn app_name(&self) -> &str {
        APP_NAME
    }

    fn browser_services(&self) -> Arc<BrowserServices> {
        Arc::clone(&self.services)
    }
}

fn ui_context(services: BrowserServices) -> ui::AppContext {
    let app: Arc<dyn UiApp> = Arc::new(QuizApp {
        services: Arc::new(services),
    });
    build_app_context(&app)
}

fn init_logger(level: Level) {
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialized: {err}");
    }
}

// ─── DESKTOP ──────────────────────────────────────────────────────────────────

#[cfg(not(target_arch = "wasm32"))]
mod desktop {
    use std::fmt;
    use std::path::PathBuf;

    use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

    use super::{APP_NAME, App, BrowserConfig, BrowserServices, LaunchBuilder, Level, Storage};

    const DEFAULT_STORE_PATH: &str = "quiz-progress.json";

    #[derive(Debug)]
    pub(super) enum ArgsError {
        MissingValue { flag: &'static str },
        UnknownArg(String),
        InvalidStorePath { raw: String },
    }

    impl fmt::Display for ArgsError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
                ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
                ArgsError::InvalidStorePath { raw } => write!(f, "invalid --store value: {raw:?}"),
            }
        }
    }

    impl std::error::Error for ArgsError {}

    fn require_value(
        args: &mut impl Iterator<Item = String>,
        flag: &'static str,
    ) -> Result<String, ArgsError> {
        args.next().ok_or(ArgsError::MissingValue { flag })
    }

    fn print_usage() {
        eprintln!("Usage:");
        eprintln!("  cargo run -p app -- [--data-root <url>] [--store <path>]");
        eprintln!();
        eprintln!("Defaults:");
        eprintln!("  --data-root {}", services::config::DEFAULT_DESKTOP_DATA_ROOT);
        eprintln!("  --store {DEFAULT_STORE_PATH}");
        eprintln!();
        eprintln!("Environment:");
        eprintln!("  QUIZ_DATA_ROOT, QUIZ_STORE_PATH, QUIZ_LOG (trace|debug|info|warn|error)");
    }

    #[derive(Debug, PartialEq, Eq)]
    pub(super) struct Args {
        pub(super) data_root: Option<String>,
        pub(super) store_path: PathBuf,
    }

    impl Args {
        /// `Ok(None)` when usage was requested.
        pub(super) fn parse(
            args: &mut impl Iterator<Item = String>,
        ) -> Result<Option<Self>, ArgsError> {
            let mut data_root = None;
            let mut store_path = std::env::var("QUIZ_STORE_PATH")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map_or_else(|| PathBuf::from(DEFAULT_STORE_PATH), PathBuf::from);

            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--data-root" => data_root = Some(require_value(args, "--data-root")?),
                    "--store" => {
                        let value = require_value(args, "--store")?;
                        if value.trim().is_empty() {
                            return Err(ArgsError::InvalidStorePath { raw: value });
                        }
                        store_path = PathBuf::from(value);
                    }
                    "--help" | "-h" => return Ok(None),
                    _ => return Err(ArgsError::UnknownArg(arg)),
                }
            }

            Ok(Some(Self {
                data_root,
                store_path,
            }))
        }
    }

    fn log_level() -> Level {
        std::env::var("QUIZ_LOG")
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(Level::INFO)
    }

    pub(super) fn run() -> Result<(), Box<dyn std::error::Error>> {
        let parsed = Args::parse(&mut std::env::args().skip(1)).map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
        let Some(args) = parsed else {
            print_usage();
            return Ok(());
        };

        super::init_logger(log_level());

        let config = match args.data_root.as_deref() {
            Some(raw) => BrowserConfig::from_root_str(raw)?,
            None => BrowserConfig::from_env()?,
        };
        let storage = Storage::json_file(&args.store_path)?;
        let services = BrowserServices::http(config, storage)?;
        tracing::info!(
            data_root = %services.config().data_root,
            store = %args.store_path.display(),
            "launching desktop"
        );

        let desktop_cfg = DesktopConfig::new().with_window(
            WindowBuilder::new()
                .with_title(APP_NAME)
                .with_always_on_top(false),
        );

        LaunchBuilder::desktop()
            .with_cfg(desktop_cfg)
            .with_context(super::ui_context(services))
            .launch(App);
        Ok(())
    }

}

// ─── WEB ──────────────────────────────────────────────────────────────────────

#[cfg(target_arch = "wasm32")]
mod web {
    use url::Url;

    use super::{App, BrowserConfig, BrowserServices, LaunchBuilder, Level, Storage};

    /// Data root relative to the page that loaded the app.
    const WEB_DATA_ROOT: &str = "./data/";

    fn data_root() -> Result<Url, Box<dyn std::error::Error>> {
        let window = web_sys::window().ok_or("no window")?;
        let href = window
            .location()
            .href()
            .map_err(|err| format!("location unavailable: {err:?}"))?;
        Ok(Url::parse(&href)?.join(WEB_DATA_ROOT)?)
    }

    pub(super) fn run() -> Result<(), Box<dyn std::error::Error>> {
        super::init_logger(Level::INFO);

        let config = BrowserConfig::new(data_root()?);
        let services = BrowserServices::http(config, Storage::local_storage())?;
        tracing::info!(data_root = %services.config().data_root, "launching web");

        LaunchBuilder::web()
            .with_context(super::ui_context(services))
            .launch(App);
        Ok(())
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    let result = desktop::run();
    #[cfg(target_arch = "wasm32")]
    let result = web::run();

    if let Err(err) = result {
        tracing::error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
