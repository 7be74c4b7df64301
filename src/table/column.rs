use serde_json::Value;

/// A table row: the raw field map of one domain record.
pub type Row = serde_json::Map<String, Value>;

/// Column descriptor. The two ways a cell gets its value are separate
/// variants so that "computed columns are never sortable" is a
/// property of the type, not a runtime check.
#[derive(Clone)]
pub enum Column {
    /// Reads one raw field off the row. Only these can sort.
    Field {
        header: String,
        key: String,
        sortable: bool,
    },
    /// Derives the cell from the whole row (formatting, badges,
    /// action labels). Excluded from sorting by construction.
    Computed {
        header: String,
        render: fn(&Row) -> String,
    },
}

impl Column {
    pub fn field(header: impl Into<String>, key: impl Into<String>) -> Self {
        Column::Field {
            header: header.into(),
            key: key.into(),
            sortable: false,
        }
    }

    pub fn sortable_field(header: impl Into<String>, key: impl Into<String>) -> Self {
        Column::Field {
            header: header.into(),
            key: key.into(),
            sortable: true,
        }
    }

    pub fn computed(header: impl Into<String>, render: fn(&Row) -> String) -> Self {
        Column::Computed {
            header: header.into(),
            render,
        }
    }

    pub fn header(&self) -> &str {
        match self {
            Column::Field { header, .. } | Column::Computed { header, .. } => header,
        }
    }

    /// The key this column sorts by, if it participates in sorting.
    pub fn sort_key(&self) -> Option<&str> {
        match self {
            Column::Field {
                key, sortable: true, ..
            } => Some(key),
            _ => None,
        }
    }

    /// Cell rendering contract: a computed column renders from the
    /// whole row; a field column stringifies the raw field, with
    /// null/missing becoming the empty string.
    pub fn cell(&self, row: &Row) -> String {
        match self {
            Column::Computed { render, .. } => render(row),
            Column::Field { key, .. } => match row.get(key) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            },
        }
    }
}
