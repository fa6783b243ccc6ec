//! Fixed Spanish to English name tables for months and weekdays.
//!
//! The dataset stores English names, callers send Spanish ones. Both tables are
//! closed: anything outside them is rejected by the query layer.

/// A closed, ordered lookup table from a lowercase Spanish token to its English name.
#[derive(Debug, Clone, Copy)]
pub struct NameMap {
    entries: &'static [(&'static str, &'static str)],
}

pub const MONTHS: NameMap = NameMap {
    entries: &[
        ("enero", "January"),
        ("febrero", "February"),
        ("marzo", "March"),
        ("abril", "April"),
        ("mayo", "May"),
        ("junio", "June"),
        ("julio", "July"),
        ("agosto", "August"),
        ("septiembre", "September"),
        ("octubre", "October"),
        ("noviembre", "November"),
        ("diciembre", "December"),
    ],
};

// Unaccented spellings only ("miercoles", "sabado").
pub const WEEKDAYS: NameMap = NameMap {
    entries: &[
        ("lunes", "Monday"),
        ("martes", "Tuesday"),
        ("miercoles", "Wednesday"),
        ("jueves", "Thursday"),
        ("viernes", "Friday"),
        ("sabado", "Saturday"),
        ("domingo", "Sunday"),
    ],
};

impl NameMap {
    /// Exact lookup; the caller is expected to lowercase `token` first.
    pub fn translate(&self, token: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(source, _)| *source == token)
            .map(|(_, english)| *english)
    }

    /// First recognized token, used for example links.
    pub fn first(&self) -> &'static str {
        self.entries[0].0
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(source, _)| *source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(MONTHS.len(), 12);
        assert_eq!(WEEKDAYS.len(), 7);
    }

    #[test]
    fn test_translate_known_tokens() {
        assert_eq!(MONTHS.translate("enero"), Some("January"));
        assert_eq!(MONTHS.translate("diciembre"), Some("December"));
        assert_eq!(WEEKDAYS.translate("miercoles"), Some("Wednesday"));
        assert_eq!(WEEKDAYS.translate("domingo"), Some("Sunday"));
    }

    #[test]
    fn test_translate_is_exact() {
        assert_eq!(MONTHS.translate("Enero"), None);
        assert_eq!(MONTHS.translate(" enero"), None);
        assert_eq!(MONTHS.translate("January"), None);
        assert_eq!(WEEKDAYS.translate("miércoles"), None);
        assert_eq!(WEEKDAYS.translate(""), None);
    }

    #[test]
    fn test_first_entries() {
        assert_eq!(MONTHS.first(), "enero");
        assert_eq!(WEEKDAYS.first(), "lunes");
    }

    #[test]
    fn test_tokens_are_lowercase_and_unique() {
        for table in [MONTHS, WEEKDAYS] {
            let tokens: Vec<&str> = table.tokens().collect();
            for token in &tokens {
                assert_eq!(*token, token.to_lowercase());
            }
            let mut deduped = tokens.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), tokens.len());
        }
    }
}
