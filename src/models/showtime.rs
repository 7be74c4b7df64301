use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One screening of a movie. `available`/`total` are display-only
/// occupancy numbers; nothing in this crate decrements them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showtime {
    pub id: String,
    pub movie_id: String,
    pub date: NaiveDate,
    /// Wall-clock start, "HH:MM".
    pub time: String,
    pub room: String,
    pub available: u32,
    pub total: u32,
}

impl Showtime {
    /// Occupancy badge value, 0..=100.
    pub fn occupancy_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let taken = self.total.saturating_sub(self.available);
        taken * 100 / self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showtime(available: u32, total: u32) -> Showtime {
        Showtime {
            id: "st-1".into(),
            movie_id: "m-1".into(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            time: "19:30".into(),
            room: "Sala 1".into(),
            available,
            total,
        }
    }

    #[test]
    fn occupancy_percent_counts_taken_seats() {
        assert_eq!(showtime(30, 40).occupancy_percent(), 25);
        assert_eq!(showtime(0, 40).occupancy_percent(), 100);
        assert_eq!(showtime(40, 40).occupancy_percent(), 0);
    }

    #[test]
    fn occupancy_percent_handles_zero_total() {
        assert_eq!(showtime(0, 0).occupancy_percent(), 0);
    }
}
