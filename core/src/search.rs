use crate::models::CatalogEntry;

// Upper then lower, so "ß" and "SS" fold to the same text.
fn fold_case(s: &str) -> String {
    s.to_uppercase().to_lowercase()
}

fn title_matches(entry: &CatalogEntry, needle: &str) -> bool {
    fold_case(&entry.title).contains(needle)
}

/// Case-insensitive substring match on titles. A blank query keeps everything.
pub fn filter_entries<'a>(entries: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
    matching_indices(entries, query).into_iter().map(|i| &entries[i]).collect()
}

/// Positions of the matching entries, in list order.
pub fn matching_indices(entries: &[CatalogEntry], query: &str) -> Vec<usize> {
    if query.trim().is_empty() {
        return (0..entries.len()).collect();
    }
    let needle = fold_case(query);
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| title_matches(e, &needle))
        .map(|(i, _)| i)
        .collect()
}

/// The listing's full list, the current query and the rows it lets through.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    entries: Vec<CatalogEntry>,
    query: String,
    visible: Vec<usize>,
}

impl SearchState {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut s = Self { entries, ..Default::default() };
        s.refilter();
        s
    }

    fn refilter(&mut self) {
        self.visible = matching_indices(&self.entries, &self.query);
    }

    /// Replaces the full list and re-applies the current query.
    pub fn set_source(&mut self, entries: Vec<CatalogEntry>) {
        self.entries = entries;
        self.refilter();
    }

    pub fn set_query(&mut self, query: &str) {
        if self.query == query {
            return;
        }
        self.query = query.to_string();
        self.refilter();
    }

    pub fn clear(&mut self) {
        self.set_query("");
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn visible(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.visible.iter().map(move |&i| &self.entries[i])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// True when there is a catalog but the query filters all of it out.
    pub fn is_empty_result(&self) -> bool {
        !self.entries.is_empty() && self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(id: u32, title: &str) -> CatalogEntry {
        CatalogEntry { id, title: title.to_string(), ..Default::default() }
    }

    fn sample() -> Vec<CatalogEntry> {
        vec![
            entry(20, "Naruto"),
            entry(1735, "Naruto: Shippuuden"),
            entry(16498, "Shingeki no Kyojin"),
            entry(1535, "Death Note"),
            entry(11061, "Boruto: Naruto Next Generations"),
        ]
    }

    fn ids<'a>(it: impl IntoIterator<Item = &'a CatalogEntry>) -> Vec<u32> {
        it.into_iter().map(|e| e.id).collect()
    }

    #[test]
    fn blank_query_is_identity() {
        let list = sample();
        for q in ["", "   ", "\t"] {
            let out = filter_entries(&list, q);
            assert_eq!(out.len(), list.len());
            assert!(out.iter().zip(&list).all(|(a, b)| std::ptr::eq(*a, b)));
        }
    }

    #[test]
    fn matches_are_an_ordered_subsequence() {
        let list = sample();
        let out = filter_entries(&list, "naruto");
        assert_eq!(ids(out.iter().copied()), vec![20, 1735, 11061]);
        for e in &out {
            assert!(list.iter().any(|l| std::ptr::eq(l, *e)));
        }
    }

    #[test]
    fn case_does_not_matter() {
        let list = sample();
        for q in ["naruto", "NOTE", "kyo", "zzz", "o", "ß"] {
            assert_eq!(
                ids(filter_entries(&list, q).iter().copied()),
                ids(filter_entries(&list, &q.to_uppercase()).iter().copied())
            );
        }
    }

    #[test]
    fn multi_char_uppercase_folds_both_ways() {
        let list = vec![entry(1, "Straße"), entry(2, "STRASSE Kids"), entry(3, "Street")];
        assert_eq!(ids(filter_entries(&list, "ß").iter().copied()), vec![1, 2]);
        assert_eq!(ids(filter_entries(&list, "SS").iter().copied()), vec![1, 2]);
        assert_eq!(ids(filter_entries(&list, "straße").iter().copied()), vec![1, 2]);
    }

    #[test]
    fn only_titles_are_searched() {
        let mut list = sample();
        list[2].synopsis = "a story about naruto fans".into();
        assert_eq!(ids(filter_entries(&list, "naruto").iter().copied()), vec![20, 1735, 11061]);
    }

    #[test]
    fn query_with_inner_spaces_is_used_as_typed() {
        let list = sample();
        assert_eq!(ids(filter_entries(&list, "death note").iter().copied()), vec![1535]);
        assert!(filter_entries(&list, " death").is_empty());
    }

    #[test]
    fn state_filters_and_restores() {
        let mut state = SearchState::new(sample());
        assert_eq!(state.visible_count(), 5);
        state.set_query("Naruto");
        assert_eq!(ids(state.visible()), vec![20, 1735, 11061]);
        state.set_query("nothing like this");
        assert!(state.is_empty_result());
        state.clear();
        assert_eq!(ids(state.visible()), ids(&sample()));
        assert_eq!(state.query(), "");
    }

    #[test]
    fn query_typed_before_load_applies_to_new_source() {
        let mut state = SearchState::default();
        state.set_query("note");
        assert!(!state.is_empty_result());
        state.set_source(sample());
        assert_eq!(ids(state.visible()), vec![1535]);
        assert_eq!(state.total(), 5);
    }
}
