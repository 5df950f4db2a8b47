use super::pagination::Pagination;

#[test]
fn exact_division_has_no_extra_page() {
    let p = Pagination::new(1, 10, 30);
    assert_eq!(p.total_items, 30);
    assert_eq!(p.total_pages, 3);
}

#[test]
fn remainder_adds_a_page() {
    let p = Pagination::new(2, 10, 31);
    assert_eq!(p.total_pages, 4);
}

#[test]
fn empty_result_has_zero_pages() {
    let p = Pagination::new(1, 10, 0);
    assert_eq!(p.total_items, 0);
    assert_eq!(p.total_pages, 0);
}

#[test]
fn zero_page_size_does_not_divide_by_zero() {
    let p = Pagination::new(1, 0, 25);
    assert_eq!(p.total_pages, 0);
}
