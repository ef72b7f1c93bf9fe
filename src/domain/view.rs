//! View - Derived Page Computation
//!
//! Filter then paginate. Recomputed on every render, nothing is cached.

use super::member::Member;

/// The visible slice of the filtered set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberPage<'a> {
    /// Rows on the requested page, in record order
    pub rows: Vec<&'a Member>,
    /// Size of the filtered set
    pub total: usize,
}

impl MemberPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Compute the visible page for `(records, search, page)`.
///
/// `page` is 1-based; 0 is read as 1. A page past the end yields no rows.
pub fn view<'a>(records: &'a [Member], search: &str, page: usize, page_size: usize) -> MemberPage<'a> {
    let needle = search.to_lowercase();
    let filtered: Vec<&Member> = records.iter().filter(|m| m.name_matches(&needle)).collect();
    let total = filtered.len();

    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    let rows = filtered.into_iter().skip(start).take(page_size).collect();

    MemberPage { rows, total }
}

/// Number of pages the pager shows for `total` rows
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<Member> {
        (0..n)
            .map(|i| Member::new(i.to_string(), format!("Member {i}"), format!("m{i}@example.com"), "member"))
            .collect()
    }

    fn ids(page: &MemberPage<'_>) -> Vec<String> {
        page.rows.iter().map(|m| m.id.to_string()).collect()
    }

    #[test]
    fn search_filters_by_name_case_insensitively() {
        let records = vec![
            Member::new("1", "Alice", "alice@example.com", "admin"),
            Member::new("2", "bob", "bob@example.com", "member"),
        ];

        let page = view(&records, "Al", 1, 10);
        assert_eq!(ids(&page), vec!["1"]);
        assert_eq!(page.total, 1);

        let page = view(&records, "", 1, 10);
        assert_eq!(ids(&page), vec!["1", "2"]);

        let page = view(&records, "BOB", 1, 10);
        assert_eq!(ids(&page), vec!["2"]);
    }

    #[test]
    fn paginates_twenty_five_records() {
        let records = numbered(25);

        let first = view(&records, "", 1, 10);
        assert_eq!(ids(&first), (0..10).map(|i| i.to_string()).collect::<Vec<_>>());

        let third = view(&records, "", 3, 10);
        assert_eq!(ids(&third), (20..25).map(|i| i.to_string()).collect::<Vec<_>>());
        assert_eq!(third.total, 25);

        assert_eq!(page_count(third.total, 10), 3);
    }

    #[test]
    fn page_past_end_is_empty_but_keeps_total() {
        let records = numbered(5);
        let page = view(&records, "", 4, 10);
        assert!(page.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let records = numbered(3);
        assert_eq!(view(&records, "", 0, 2).rows.len(), 2);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(3, 0), 0);
    }
}
