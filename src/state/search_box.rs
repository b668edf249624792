//! Search input with `key:value` filter tokens.
//!
//! Typing `autor:Tolkien` and pressing Enter turns the text into an author
//! filter chip; Backspace on an empty input drops the newest chip.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Autor,
    Genero,
}

impl FilterKey {
    pub const ALL: [FilterKey; 2] = [FilterKey::Autor, FilterKey::Genero];

    /// Prefix typed in the search input, colon included.
    pub fn token(self) -> &'static str {
        match self {
            FilterKey::Autor => "autor:",
            FilterKey::Genero => "genero:",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterKey::Autor => "Autor",
            FilterKey::Genero => "Gênero",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            FilterKey::Autor => "filter-autor",
            FilterKey::Genero => "filter-genero",
        }
    }
}

/// Active filters, oldest first. Setting an existing key moves it to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    entries: Vec<(FilterKey, String)>,
}

impl ActiveFilters {
    pub fn set(&mut self, key: FilterKey, value: String) {
        self.entries.retain(|(k, _)| *k != key);
        self.entries.push((key, value));
    }

    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: FilterKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| *k != key);
        self.entries.len() != before
    }

    pub fn pop_newest(&mut self) -> Option<(FilterKey, String)> {
        self.entries.pop()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Recognizes `autor:` / `genero:` (any case) at the start of `text`.
/// Returns `None` when no prefix matches or the trimmed value is empty.
pub fn parse_filter_token(text: &str) -> Option<(FilterKey, String)> {
    FilterKey::ALL.into_iter().find_map(|key| {
        let prefix = key.token();
        let head = text.get(..prefix.len())?;
        if !head.eq_ignore_ascii_case(prefix) {
            return None;
        }
        let value = text[prefix.len()..].trim();
        (!value.is_empty()).then(|| (key, value.to_string()))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    FilterAdded(FilterKey),
    FilterRemoved(FilterKey),
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    pub input: String,
    pub filters: ActiveFilters,
}

impl SearchBox {
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Handles a key press, named as in `KeyboardEvent.key`.
    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        match key {
            "Enter" if self.input.contains(':') => match parse_filter_token(&self.input) {
                Some((filter, value)) => {
                    self.filters.set(filter, value);
                    self.input.clear();
                    KeyOutcome::FilterAdded(filter)
                }
                None => KeyOutcome::Ignored,
            },
            "Backspace" if self.input.is_empty() => match self.filters.pop_newest() {
                Some((filter, _)) => KeyOutcome::FilterRemoved(filter),
                None => KeyOutcome::Ignored,
            },
            _ => KeyOutcome::Ignored,
        }
    }

    pub fn remove_filter(&mut self, key: FilterKey) -> bool {
        self.filters.remove(key)
    }
}
