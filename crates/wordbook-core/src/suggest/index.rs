use crate::unicode::fold_case;

/// Every dictionary word ordered by its case-folded comparison key.
///
/// `folded[i]` is the comparison key of `words[i]`. Ties between words that
/// fold to the same key are broken by the original bytes, so the order is
/// total and deterministic.
#[derive(Debug, Default)]
pub(crate) struct SortedIndex {
    words: Vec<Box<str>>,
    folded: Vec<Box<str>>,
}

impl SortedIndex {
    pub(crate) fn build<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut pairs: Vec<(Box<str>, Box<str>)> = words
            .into_iter()
            .map(|w| (fold_case(w).into_boxed_str(), Box::from(w)))
            .collect();
        pairs.sort_unstable_by(|a, b| {
            a.0.as_bytes()
                .cmp(b.0.as_bytes())
                .then_with(|| a.1.as_bytes().cmp(b.1.as_bytes()))
        });

        let (folded, words) = pairs.into_iter().unzip();
        Self { words, folded }
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    /// First position whose comparison key is `>= key`.
    fn lower_bound(&self, key: &str) -> usize {
        self.folded.partition_point(|f| f.as_bytes() < key.as_bytes())
    }

    /// Words whose comparison key starts with `folded_prefix`, in index order.
    ///
    /// All such keys form one contiguous run starting at the lower bound, so
    /// the scan ends at the first key that does not match.
    pub(crate) fn prefix_matches<'s: 'p, 'p>(
        &'s self,
        folded_prefix: &'p str,
    ) -> impl Iterator<Item = &'s str> + 'p {
        let start = self.lower_bound(folded_prefix);
        self.folded[start..]
            .iter()
            .zip(&self.words[start..])
            .take_while(move |(f, _)| f.starts_with(folded_prefix))
            .map(|(_, w)| &**w)
    }

    #[cfg(test)]
    pub(crate) fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| &**w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_orders_by_folded_key() {
        let index = SortedIndex::build(["apple", "app", "Application", "Banana", "avocado"]);
        let words: Vec<&str> = index.words().collect();
        assert_eq!(
            words,
            vec!["app", "apple", "Application", "avocado", "Banana"]
        );
    }

    #[test]
    fn test_tie_broken_by_original_bytes() {
        let index = SortedIndex::build(["polish", "Polish", "POLISH"]);
        let words: Vec<&str> = index.words().collect();
        assert_eq!(words, vec!["POLISH", "Polish", "polish"]);
    }

    #[test]
    fn test_lower_bound() {
        let index = SortedIndex::build(["b", "d", "f"]);
        assert_eq!(index.lower_bound("a"), 0);
        assert_eq!(index.lower_bound("b"), 0);
        assert_eq!(index.lower_bound("c"), 1);
        assert_eq!(index.lower_bound("f"), 2);
        assert_eq!(index.lower_bound("g"), 3);
    }

    #[test]
    fn test_prefix_matches_stops_at_run_end() {
        let index = SortedIndex::build(["ca", "car", "Cart", "cat", "dog"]);
        let hits: Vec<&str> = index.prefix_matches("car").collect();
        assert_eq!(hits, vec!["car", "Cart"]);
    }

    #[test]
    fn test_prefix_past_end() {
        let index = SortedIndex::build(["a", "b"]);
        assert_eq!(index.prefix_matches("zz").count(), 0);
    }

    #[test]
    fn test_empty_index() {
        let index = SortedIndex::build(std::iter::empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.prefix_matches("a").count(), 0);
    }
}
