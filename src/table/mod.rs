//! Generic sortable/paginated/searchable table used by every admin
//! management screen. Pure transformations over row objects; malformed
//! or empty input degrades to an empty or unsorted table, never an
//! error.

pub mod column;
pub mod view;

pub use column::{Column, Row};
pub use view::{
    build_view, filter, page_window, paginate, sort, total_pages, SortDirection, TableQuery,
    TableState, TableView,
};
