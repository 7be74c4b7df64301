//! Seat/ticket selection and pricing, shared by the customer web flow
//! and the point-of-sale flow. Everything in here is synchronous and
//! free of I/O; one engine instance lives for one booking flow and is
//! discarded at checkout or cancellation.

pub mod engine;
pub mod seat_map;

pub use engine::{CheckoutValidation, SelectionEngine, Totals};
pub use seat_map::{seat_map, SeatMapRow, SeatView};
