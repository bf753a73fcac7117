/// Page-level keyboard shortcuts on the browse screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// `/`: focus the search box.
    FocusSearch,
    /// `r`: shuffle.
    Shuffle,
    /// `s`: show starred.
    ShowStarred,
}

impl Shortcut {
    pub const ALL: [Shortcut; 3] = [Shortcut::FocusSearch, Shortcut::Shuffle, Shortcut::ShowStarred];

    /// The `KeyboardEvent.key` value that triggers this shortcut. Case-sensitive.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::FocusSearch => "/",
            Self::Shuffle => "r",
            Self::ShowStarred => "s",
        }
    }
}

/// Map a typed key to a shortcut. Shifted letters do not match.
#[must_use]
pub fn shortcut_for_key(key: &str) -> Option<Shortcut> {
    Shortcut::ALL.into_iter().find(|shortcut| shortcut.key() == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_plain_keys() {
        assert_eq!(shortcut_for_key("/"), Some(Shortcut::FocusSearch));
        assert_eq!(shortcut_for_key("r"), Some(Shortcut::Shuffle));
        assert_eq!(shortcut_for_key("s"), Some(Shortcut::ShowStarred));
        assert_eq!(shortcut_for_key("x"), None);
    }

    #[test]
    fn shifted_letters_are_not_shortcuts() {
        assert_eq!(shortcut_for_key("R"), None);
        assert_eq!(shortcut_for_key("S"), None);
    }
}
