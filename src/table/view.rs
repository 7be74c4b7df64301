use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::column::{Column, Row};

/// How many page-number buttons the pager shows at most.
const PAGE_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Keep rows whose own raw scalar field values contain the term,
/// case-insensitively. Null fields never match; an empty term keeps
/// everything. Deliberately shallow: nested arrays/objects and
/// computed column output are not consulted.
pub fn filter(rows: &[Row], term: &str) -> Vec<Row> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            row.values().any(|v| match v {
                Value::String(s) => s.to_lowercase().contains(&term),
                Value::Number(n) => n.to_string().contains(&term),
                Value::Bool(b) => b.to_string().contains(&term),
                _ => false,
            })
        })
        .cloned()
        .collect()
}

/// Sort rows in place by one raw field. Numbers compare numerically,
/// strings lexicographically, anything else by its stringified form.
/// The original implementation used an unstable comparator; this one
/// is stable (`sort_by`), so equal keys keep their relative order.
pub fn sort(rows: &mut [Row], key: &str, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = compare_values(a.get(key), b.get(key));
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        // Missing/null sorts first; mixed types fall back to strings.
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), Some(_)) => Ordering::Less,
        (Some(_), None | Some(Value::Null)) => Ordering::Greater,
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

/// 1-indexed page slice. A page past the end is simply empty.
pub fn paginate(rows: &[Row], page_size: usize, page: usize) -> &[Row] {
    if page_size == 0 {
        return &[];
    }
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = (start + page_size).min(rows.len());
    &rows[start..end]
}

pub fn total_pages(row_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    row_count.div_ceil(page_size).max(1)
}

/// The page-number buttons to render: at most five, centered on the
/// current page, clamped at both ends of the range.
pub fn page_window(total_pages: usize, current: usize) -> Vec<usize> {
    if total_pages <= PAGE_WINDOW {
        return (1..=total_pages.max(1)).collect();
    }
    let current = current.clamp(1, total_pages);
    let half = PAGE_WINDOW / 2;
    let start = if current <= half + 1 {
        1
    } else if current >= total_pages - half {
        total_pages - (PAGE_WINDOW - 1)
    } else {
        current - half
    };
    (start..start + PAGE_WINDOW).collect()
}

/// Transient table UI state. Owns the documented UX contract that a
/// new search term resets the page back to 1.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub search: String,
    pub sort: Option<(String, SortDirection)>,
    pub page: usize,
}

impl TableState {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 1,
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Header click: first click sorts ascending, a second on the same
    /// column flips the direction. Unsortable columns are ignored.
    pub fn toggle_sort(&mut self, column: &Column) {
        let Some(key) = column.sort_key() else {
            return;
        };
        self.sort = match self.sort.take() {
            Some((current, dir)) if current == key => Some((current, dir.flipped())),
            _ => Some((key.to_string(), SortDirection::Asc)),
        };
    }
}

/// Query-string shape the admin endpoints accept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableQuery {
    pub query: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<SortDirection>,
    pub page: Option<usize>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<usize>,
}

/// The exact slice of the table to render plus pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub headers: Vec<String>,
    /// Row key (from `key_field`) per rendered row, for row actions.
    pub keys: Vec<String>,
    /// Rendered cell values, one inner vec per row on this page.
    pub cells: Vec<Vec<String>>,
    #[serde(rename = "totalRows")]
    pub total_rows: usize,
    pub page: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    #[serde(rename = "pageWindow")]
    pub page_window: Vec<usize>,
}

impl TableView {
    /// Zero filtered rows: the caller renders a single "no data" row
    /// spanning all columns rather than dropping the table.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Run the full pipeline: filter, sort (only when the requested key
/// belongs to a sortable field column), slice the page, render cells.
pub fn build_view(
    columns: &[Column],
    rows: &[Row],
    key_field: &str,
    query: &TableQuery,
    default_page_size: usize,
) -> TableView {
    let mut filtered = filter(rows, query.query.as_deref().unwrap_or(""));

    if let Some(requested) = query.sort.as_deref() {
        let sortable = columns
            .iter()
            .filter_map(Column::sort_key)
            .any(|key| key == requested);
        if sortable {
            sort(&mut filtered, requested, query.dir.unwrap_or_default());
        }
    }

    let page_size = query.page_size.unwrap_or(default_page_size).max(1);
    let page = query.page.unwrap_or(1).max(1);
    let page_rows = paginate(&filtered, page_size, page);
    let pages = total_pages(filtered.len(), page_size);

    TableView {
        headers: columns.iter().map(|c| c.header().to_string()).collect(),
        keys: page_rows
            .iter()
            .map(|row| match row.get(key_field) {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            })
            .collect(),
        cells: page_rows
            .iter()
            .map(|row| columns.iter().map(|c| c.cell(row)).collect())
            .collect(),
        total_rows: filtered.len(),
        page,
        page_size,
        total_pages: pages,
        page_window: page_window(pages, page),
    }
}
