use serde::{Deserialize, Serialize};

/// Physical seat category, fixed per auditorium layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatKind {
    Standard,
    Vip,
    Premium,
    Accessible,
}

/// Catalog status of a seat. `Selected` is deliberately not here:
/// selection lives in the booking engine, not on the seat record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Occupied,
    Disabled,
}

/// Effective status shown to the user: catalog status projected
/// against the current selection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatDisplayStatus {
    Available,
    Selected,
    Occupied,
    Disabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    /// Row letter + number, e.g. "A1".
    pub id: String,
    pub row: String,
    pub number: u32,
    #[serde(rename = "type")]
    pub kind: SeatKind,
    pub status: SeatStatus,
}

impl Seat {
    pub fn new(row: impl Into<String>, number: u32, kind: SeatKind, status: SeatStatus) -> Self {
        let row = row.into();
        Self {
            id: format!("{}{}", row, number),
            row,
            number,
            kind,
            status,
        }
    }

    /// Occupied and disabled seats can never enter the selection set.
    pub fn is_selectable(&self) -> bool {
        self.status == SeatStatus::Available
    }

    pub fn display_status(&self, selected: bool) -> SeatDisplayStatus {
        if selected {
            return SeatDisplayStatus::Selected;
        }
        match self.status {
            SeatStatus::Available => SeatDisplayStatus::Available,
            SeatStatus::Occupied => SeatDisplayStatus::Occupied,
            SeatStatus::Disabled => SeatDisplayStatus::Disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_id_is_row_plus_number() {
        let seat = Seat::new("B", 7, SeatKind::Standard, SeatStatus::Available);
        assert_eq!(seat.id, "B7");
    }

    #[test]
    fn only_available_seats_are_selectable() {
        let available = Seat::new("A", 1, SeatKind::Standard, SeatStatus::Available);
        let occupied = Seat::new("A", 2, SeatKind::Standard, SeatStatus::Occupied);
        let disabled = Seat::new("A", 3, SeatKind::Standard, SeatStatus::Disabled);
        assert!(available.is_selectable());
        assert!(!occupied.is_selectable());
        assert!(!disabled.is_selectable());
    }

    #[test]
    fn selection_overrides_display_status() {
        let seat = Seat::new("A", 1, SeatKind::Vip, SeatStatus::Available);
        assert_eq!(seat.display_status(true), SeatDisplayStatus::Selected);
        assert_eq!(seat.display_status(false), SeatDisplayStatus::Available);
    }
}
