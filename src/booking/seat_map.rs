use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Seat, SeatDisplayStatus, SeatKind};

/// One seat as the seat picker renders it: catalog data plus the
/// effective status for the current selection.
#[derive(Debug, Clone, Serialize)]
pub struct SeatView {
    pub id: String,
    pub row: String,
    pub number: u32,
    #[serde(rename = "type")]
    pub kind: SeatKind,
    pub status: SeatDisplayStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatMapRow {
    pub row: String,
    pub seats: Vec<SeatView>,
}

/// Read-only projection of a seat catalog into render order: rows
/// sorted lexicographically, seats numerically within each row. A seat
/// shows as `selected` when its id is in the selection set, otherwise
/// its own catalog status.
pub fn seat_map<'a, I>(seats: I, selected_seat_ids: &[String]) -> Vec<SeatMapRow>
where
    I: IntoIterator<Item = &'a Seat>,
{
    let mut rows: BTreeMap<String, Vec<SeatView>> = BTreeMap::new();
    for seat in seats {
        let selected = selected_seat_ids.iter().any(|id| *id == seat.id);
        rows.entry(seat.row.clone()).or_default().push(SeatView {
            id: seat.id.clone(),
            row: seat.row.clone(),
            number: seat.number,
            kind: seat.kind,
            status: seat.display_status(selected),
        });
    }
    rows.into_iter()
        .map(|(row, mut seats)| {
            seats.sort_by_key(|s| s.number);
            SeatMapRow { row, seats }
        })
        .collect()
}
