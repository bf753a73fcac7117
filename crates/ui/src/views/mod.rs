mod browse;
mod history;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use browse::BrowseView;
pub use history::{HISTORY_ROWS, HistoryView};
pub use state::{ViewError, ViewState, view_state_from_resource};
