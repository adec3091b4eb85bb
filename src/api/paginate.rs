use super::envelope::NO_PAGE;

/// One page of a collection plus its position within the whole.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub num_pages: u64,
}

impl<T> Page<T> {
    /// Next page number, or [`NO_PAGE`] when this is the last page.
    pub fn next(&self) -> u64 {
        if self.number < self.num_pages {
            self.number + 1
        } else {
            NO_PAGE
        }
    }

    /// Previous page number, or [`NO_PAGE`] when this is the first page.
    pub fn prev(&self) -> u64 {
        if self.number > 1 {
            self.number - 1
        } else {
            NO_PAGE
        }
    }
}

/// Slice `items` into the requested page.
///
/// Invalid page input never errors: a missing, non-numeric, or
/// non-positive `page` falls back to page 1, and a page past the end is
/// clamped to the last page. An empty collection yields one empty page.
pub fn paginate<T>(items: Vec<T>, page: Option<&str>, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let num_pages = ((items.len() + per_page - 1) / per_page).max(1) as u64;

    let requested = page
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1);
    let number = requested.min(num_pages);

    let start = ((number - 1) as usize) * per_page;
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(per_page)
        .collect();

    Page {
        items,
        number,
        num_pages,
    }
}
