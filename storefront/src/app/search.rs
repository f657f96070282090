//! Catalog search filter
//!
//! Case-insensitive substring match over an item's title and tagline.

use crate::domain::entities::Item;

/// Items whose title + tagline contain `query`, in catalog order
///
/// An empty or whitespace-only query matches everything.
pub fn filter_catalog<'a>(catalog: &'a [Item], query: &str) -> Vec<&'a Item> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.iter().collect();
    }

    catalog
        .iter()
        .filter(|item| item.search_text().to_lowercase().contains(&needle))
        .collect()
}

/// "1 item found" / "3 items found"
pub fn results_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} item{} found", count, plural)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_catalog;

    fn ids<'a>(items: &[&'a Item]) -> Vec<&'a str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let catalog = test_catalog();

        let all: Vec<&Item> = catalog.iter().collect();
        assert_eq!(filter_catalog(&catalog, ""), all);
        assert_eq!(filter_catalog(&catalog, "   "), all);
    }

    #[test]
    fn matches_title_case_insensitively() {
        let catalog = test_catalog();

        let found = filter_catalog(&catalog, "CANDLE");

        assert_eq!(ids(&found), vec!["ossuary-candle"]);
    }

    #[test]
    fn matches_tagline() {
        let catalog = test_catalog();

        let found = filter_catalog(&catalog, "moonlight");

        assert_eq!(ids(&found), vec!["curiosity-vial-set"]);
    }

    #[test]
    fn query_is_trimmed() {
        let catalog = test_catalog();

        let found = filter_catalog(&catalog, "  quill  ");

        assert_eq!(ids(&found), vec!["crow-feather-quill"]);
    }

    #[test]
    fn no_match_is_empty() {
        let catalog = test_catalog();

        assert!(filter_catalog(&catalog, "chainsaw").is_empty());
    }

    #[test]
    fn results_are_ordered_subsequence_that_all_match() {
        let catalog = test_catalog();

        for query in ["c", "e", "st", "ring", "Black", "r", "x", "(6)"] {
            let found = filter_catalog(&catalog, query);
            let needle = query.to_lowercase();

            assert!(found
                .iter()
                .all(|i| i.search_text().to_lowercase().contains(&needle)));

            let positions: Vec<usize> = found
                .iter()
                .map(|f| catalog.iter().position(|c| c.id == f.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "order for {query}");
        }
    }

    #[test]
    fn results_label_pluralizes() {
        assert_eq!(results_label(0), "0 items found");
        assert_eq!(results_label(1), "1 item found");
        assert_eq!(results_label(5), "5 items found");
    }
}
