use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct PageContext<T> {
    pub rows: Vec<T>,
    pub total_rows: usize,
    pub next_offset: usize,
    pub prev_offset: usize,
    pub page_list: Vec<(String, usize)>,
    pub message: Option<String>,
}

impl<T> PageContext<T> {
    /// Slices one page out of an already filtered view. Offsets past the end
    /// clamp to the start of the last page.
    pub fn from_view(view: Vec<T>, page_size: usize, offset: usize) -> Self {
        let total_rows = view.len();
        if total_rows == 0 || page_size == 0 {
            return Self::no_rows();
        }

        let page_count = total_rows.div_ceil(page_size);
        let last_offset = (page_count - 1) * page_size;
        let current_offset = (offset - offset % page_size).min(last_offset);

        let next_offset = (current_offset + page_size).min(last_offset);
        let prev_offset = current_offset.saturating_sub(page_size);

        let page_list = (0..page_count)
            .map(|n| {
                let page = if n * page_size == current_offset {
                    String::from("...")
                } else {
                    format!("{}", n + 1)
                };

                (page, n * page_size)
            })
            .collect();

        let end = (current_offset + page_size).min(total_rows);
        let rows = view
            .into_iter()
            .skip(current_offset)
            .take(page_size)
            .collect();

        Self {
            rows,
            total_rows,
            next_offset,
            prev_offset,
            page_list,
            message: Some(format!("{} - {} / {}", current_offset, end, total_rows)),
        }
    }

    pub fn no_rows() -> Self {
        Self {
            rows: vec![],
            total_rows: 0,
            next_offset: 0,
            prev_offset: 0,
            page_list: vec![(String::from("1"), 0)],
            message: Some(String::from("No results")),
        }
    }
}
