mod browse_vm;
mod history_vm;
mod html;
mod question_vm;
mod shortcuts;
mod time_fmt;

pub use browse_vm::{
    BrowsePageVm, BrowseScreenVm, FilterControlsVm, FilterEdit, NO_MATCHES, NO_STARRED,
    SelectOptionVm, apply_filter_edit, map_browse_page, map_browse_screen, map_filter_controls,
    mode_label,
};
pub use history_vm::{HistoryRowVm, map_history_rows};
pub use html::sanitize_html;
pub use question_vm::{
    ChoiceVm, NO_EXPLANATION, QuestionCardVm, choice_letter, map_question_card, star_label,
};
pub use shortcuts::{Shortcut, shortcut_for_key};
pub use time_fmt::format_datetime;
