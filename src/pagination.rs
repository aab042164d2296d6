//! Fixed-size page slicing for question listings.

pub const QUESTIONS_PER_PAGE: usize = 10;

/// `?page=N` query. Absent or non-integer values fall back to page 1.
#[derive(Clone, Debug, Default)]
pub struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    pub fn new(page: i64) -> Self {
        PageQuery { page: Some(page.to_string()) }
    }

    /// Reads the first `page=` pair of a raw query string; other keys and repeats are ignored.
    pub fn from_raw(query: Option<&str>) -> Self {
        let page = query
            .unwrap_or("")
            .split('&')
            .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
            .find(|(key, _)| *key == "page")
            .map(|(_, value)| value.to_string());
        PageQuery { page }
    }

    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

/// Items `[(page-1)*per_page, page*per_page)` of `items`. Pages before 1 or past the end are empty.
pub fn paginate<T>(items: &[T], page: i64, per_page: usize) -> &[T] {
    if page < 1 || per_page == 0 {
        return &[];
    }
    let start = match usize::try_from(page - 1).ok().and_then(|p| p.checked_mul(per_page)) {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}
