use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Movie, Product, Seat, SeatKind, SeatStatus, Showtime, TicketType};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("movie {0} not found")]
    MovieNotFound(String),
    #[error("showtime {0} not found")]
    ShowtimeNotFound(String),
}

/// Catalog collaborator: movies, showtimes, seat maps, ticket types
/// and concession products. The booking core treats everything served
/// from here as an immutable snapshot for the duration of a selection
/// session.
///
/// In-memory stand-in for the real scheduling backend; the async
/// surface is the seam where that backend would plug in.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    movies: Vec<Movie>,
    showtimes: Vec<Showtime>,
    /// Seat catalog per showtime id, occupied seats included.
    seats: HashMap<String, Vec<Seat>>,
    ticket_types: Vec<TicketType>,
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(
        movies: Vec<Movie>,
        showtimes: Vec<Showtime>,
        seats: HashMap<String, Vec<Seat>>,
        ticket_types: Vec<TicketType>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            movies,
            showtimes,
            seats,
            ticket_types,
            products,
        }
    }

    /// The demo data set the front ends were built against.
    pub fn with_sample_data() -> Self {
        let movies = vec![
            Movie {
                id: "minecraft".into(),
                title: "Minecraft".into(),
                genre: "Adventure".into(),
                duration_minutes: 101,
                rating: "PG".into(),
                poster_url: None,
            },
            Movie {
                id: "blanca-nieves".into(),
                title: "Blanca Nieves".into(),
                genre: "Fantasy".into(),
                duration_minutes: 109,
                rating: "PG".into(),
                poster_url: None,
            },
            Movie {
                id: "dune-3".into(),
                title: "Dune: Part Three".into(),
                genre: "Sci-Fi".into(),
                duration_minutes: 166,
                rating: "PG-13".into(),
                poster_url: None,
            },
        ];

        let date = NaiveDate::from_ymd_opt(2026, 9, 5).unwrap_or_default();
        let mut showtimes = Vec::new();
        let mut seats = HashMap::new();
        for (i, movie) in movies.iter().enumerate() {
            for (j, time) in ["16:00", "19:30", "22:00"].iter().enumerate() {
                let id = format!("{}-{}", movie.id, j + 1);
                let seat_catalog = sample_seat_grid(i + j);
                let available = seat_catalog
                    .iter()
                    .filter(|s| s.status == SeatStatus::Available)
                    .count() as u32;
                showtimes.push(Showtime {
                    id: id.clone(),
                    movie_id: movie.id.clone(),
                    date,
                    time: (*time).to_string(),
                    room: format!("Sala {}", j + 1),
                    available,
                    total: seat_catalog.len() as u32,
                });
                seats.insert(id, seat_catalog);
            }
        }

        let ticket_types = vec![
            TicketType::new("adult", "Adult", Decimal::from(1000)),
            TicketType::new("child", "Child", Decimal::from(600)),
            TicketType::new("senior", "Senior", Decimal::from(700)),
            TicketType::new("student", "Student", Decimal::from(800)),
        ];

        let products = vec![
            Product::new("popcorn-l", "Large popcorn", Decimal::from(550)),
            Product::new("soda-m", "Medium soda", Decimal::from(300)),
            Product::new("combo-duo", "Duo combo", Decimal::from(800)).with_discount(20),
            Product::new("nachos", "Nachos", Decimal::from(450)).with_discount(10),
        ];

        Self::new(movies, showtimes, seats, ticket_types, products)
    }

    pub async fn movies(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    pub async fn movie(&self, movie_id: &str) -> Result<Movie, CatalogError> {
        self.movies
            .iter()
            .find(|m| m.id == movie_id)
            .cloned()
            .ok_or_else(|| CatalogError::MovieNotFound(movie_id.to_string()))
    }

    pub async fn showtimes_for_movie(&self, movie_id: &str) -> Result<Vec<Showtime>, CatalogError> {
        // Listing showtimes for an unknown movie is a lookup error, not
        // an empty list.
        self.movie(movie_id).await?;
        Ok(self
            .showtimes
            .iter()
            .filter(|s| s.movie_id == movie_id)
            .cloned()
            .collect())
    }

    pub async fn showtimes(&self) -> Vec<Showtime> {
        self.showtimes.clone()
    }

    pub async fn seats_for_showtime(&self, showtime_id: &str) -> Result<Vec<Seat>, CatalogError> {
        self.seats
            .get(showtime_id)
            .cloned()
            .ok_or_else(|| CatalogError::ShowtimeNotFound(showtime_id.to_string()))
    }

    pub async fn ticket_types(&self) -> Vec<TicketType> {
        self.ticket_types.clone()
    }

    pub async fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub async fn product(&self, product_id: &str) -> Option<Product> {
        self.products.iter().find(|p| p.id == product_id).cloned()
    }
}

/// 6 rows x 8 seats: front row accessible aisle seats, back row VIP,
/// row E premium, plus a deterministic scattering of occupied seats so
/// every showtime looks partially sold.
fn sample_seat_grid(salt: usize) -> Vec<Seat> {
    let mut seats = Vec::with_capacity(48);
    for (row_idx, row) in ["A", "B", "C", "D", "E", "F"].iter().enumerate() {
        for number in 1..=8u32 {
            let kind = match (*row, number) {
                ("A", 1) | ("A", 8) => SeatKind::Accessible,
                ("F", _) => SeatKind::Vip,
                ("E", _) => SeatKind::Premium,
                _ => SeatKind::Standard,
            };
            let status = if (row_idx * 8 + number as usize + salt) % 7 == 0 {
                SeatStatus::Occupied
            } else if *row == "A" && number == 4 {
                SeatStatus::Disabled
            } else {
                SeatStatus::Available
            };
            seats.push(Seat::new(*row, number, kind, status));
        }
    }
    seats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sample_catalog_is_internally_consistent() {
        let catalog = InMemoryCatalog::with_sample_data();
        for showtime in catalog.showtimes().await {
            let seats = catalog
                .seats_for_showtime(&showtime.id)
                .await
                .expect("every showtime has a seat catalog");
            assert_eq!(seats.len() as u32, showtime.total);
            let available = seats.iter().filter(|s| s.is_selectable()).count() as u32;
            assert_eq!(available, showtime.available);
            assert!(showtime.available <= showtime.total);
        }
    }

    #[tokio::test]
    async fn unknown_ids_surface_as_catalog_errors() {
        let catalog = InMemoryCatalog::with_sample_data();
        assert!(matches!(
            catalog.movie("nope").await,
            Err(CatalogError::MovieNotFound(_))
        ));
        assert!(matches!(
            catalog.seats_for_showtime("nope").await,
            Err(CatalogError::ShowtimeNotFound(_))
        ));
        assert!(matches!(
            catalog.showtimes_for_movie("nope").await,
            Err(CatalogError::MovieNotFound(_))
        ));
    }
}
