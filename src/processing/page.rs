//! 1-based pagination.

/// Returns page `page_number` (1-based) of `page_size` items.
///
/// - `page_size <= 0` always yields an empty page.
/// - An offset past the end yields an empty page; the last page may be short.
/// - Page numbers below 1 produce a negative offset, which skips nothing, so they return the
///   first `page_size` items.
pub fn get_page<T: Clone>(items: &[T], page_number: i32, page_size: i32) -> Vec<T> {
    if page_size <= 0 {
        return Vec::new();
    }

    let offset = (i64::from(page_number) - 1) * i64::from(page_size);
    let skip = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
    let take = usize::try_from(page_size).unwrap_or(usize::MAX);

    items.iter().skip(skip).take(take).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::get_page;

    #[test]
    fn returns_requested_window() {
        let items: Vec<i32> = (1..=5).collect();
        assert_eq!(get_page(&items, 1, 2), vec![1, 2]);
        assert_eq!(get_page(&items, 2, 2), vec![3, 4]);
        assert_eq!(get_page(&items, 3, 2), vec![5]);
        assert!(get_page(&items, 4, 2).is_empty());
    }

    #[test]
    fn non_positive_page_size_is_empty() {
        let items: Vec<i32> = (1..=5).collect();
        for page in [-3, 0, 1, 2, 100] {
            assert!(get_page(&items, page, 0).is_empty());
            assert!(get_page(&items, page, -1).is_empty());
        }
    }

    #[test]
    fn pages_below_one_start_at_the_beginning() {
        let items: Vec<i32> = (1..=5).collect();
        assert_eq!(get_page(&items, 0, 2), vec![1, 2]);
        assert_eq!(get_page(&items, -7, 3), vec![1, 2, 3]);
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let items = vec!['a', 'b'];
        assert!(get_page(&items, i32::MAX, i32::MAX).is_empty());
        assert!(get_page(&items, i32::MIN, i32::MAX).len() == 2);
    }

    #[test]
    fn concatenated_pages_rebuild_input() {
        let items: Vec<i32> = (0..23).collect();
        for size in 1..=25 {
            let pages = (items.len() as i32 + size - 1) / size;
            let rebuilt: Vec<i32> = (1..=pages).flat_map(|p| get_page(&items, p, size)).collect();
            assert_eq!(rebuilt, items, "page size {size}");
        }
    }
}
