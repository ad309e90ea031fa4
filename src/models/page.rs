use serde::Serialize;

/// A bounded slice of a larger result set plus total-count metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub size: i64,
    pub number: i64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, number: i64, size: i64, total_elements: i64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + size - 1) / size
        };

        Page {
            first: number == 0,
            last: number + 1 >= total_pages,
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            size,
            number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_set_is_a_single_empty_last_page() {
        let page: Page<i32> = Page::new(vec![], 0, 10, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.first);
        assert!(page.last);
        assert!(page.empty);
    }

    #[test]
    fn total_pages_rounds_up_on_remainder() {
        let page = Page::new(vec![1, 2, 3], 0, 3, 7);
        assert_eq!(page.total_pages, 3);
        assert!(page.first);
        assert!(!page.last);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let page = Page::new(vec![1], 9, 1, 10);
        assert_eq!(page.total_pages, 10);
        assert!(!page.first);
        assert!(page.last);
        assert!(!page.empty);
    }

    #[test]
    fn middle_page_is_neither_first_nor_last() {
        let page = Page::new(vec![1], 1, 1, 3);
        assert!(!page.first);
        assert!(!page.last);
        assert_eq!(page.number, 1);
        assert_eq!(page.size, 1);
        assert_eq!(page.total_elements, 3);
    }
}
