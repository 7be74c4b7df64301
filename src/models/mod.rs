pub mod movie;
pub mod order;
pub mod product;
pub mod seat;
pub mod showtime;
pub mod ticket;

pub use movie::Movie;
pub use order::{ConcessionLine, OrderReceipt, OrderSummary, TicketLine};
pub use product::Product;
pub use seat::{Seat, SeatDisplayStatus, SeatKind, SeatStatus};
pub use showtime::Showtime;
pub use ticket::TicketType;
