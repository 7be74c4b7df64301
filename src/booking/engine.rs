use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::{ConcessionLine, OrderSummary, Product, Seat, TicketLine, TicketType};

/// Default cap on selected seats per booking flow.
pub const DEFAULT_MAX_SELECTIONS: usize = 10;

/// Outcome of the pre-checkout reconciliation check. Advisory data,
/// not an error: the caller decides whether to block navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckoutValidation {
    Ok,
    NoSeatsSelected,
    NoTicketsSelected,
    SeatTicketMismatch { seat_count: usize, ticket_count: u32 },
}

impl CheckoutValidation {
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckoutValidation::Ok)
    }
}

/// Monetary breakdown derived from the current selection. Values are
/// exact decimals; round at the display boundary only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub ticket_count: u32,
    pub ticket_total: Decimal,
    pub concession_regular_total: Decimal,
    pub concession_discounted_total: Decimal,
    pub grand_total: Decimal,
}

/// Tracks one in-progress booking: selected seat ids, per-ticket-type
/// quantities and concession cart lines, over an immutable catalog
/// snapshot taken when the flow starts.
///
/// Not a state machine: a monotonic-until-discarded accumulator. There
/// is no resume/rehydrate contract; drop the engine and start over.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    seats: HashMap<String, Seat>,
    ticket_types: HashMap<String, TicketType>,
    max_selections: usize,
    selected_seat_ids: Vec<String>,
    ticket_lines: Vec<TicketLine>,
    cart: Vec<ConcessionLine>,
}

impl SelectionEngine {
    pub fn new(seats: Vec<Seat>, ticket_types: Vec<TicketType>) -> Self {
        Self {
            seats: seats.into_iter().map(|s| (s.id.clone(), s)).collect(),
            ticket_types: ticket_types
                .into_iter()
                .map(|t| (t.id.clone(), t))
                .collect(),
            max_selections: DEFAULT_MAX_SELECTIONS,
            selected_seat_ids: Vec::new(),
            ticket_lines: Vec::new(),
            cart: Vec::new(),
        }
    }

    pub fn with_max_selections(mut self, cap: usize) -> Self {
        self.max_selections = cap;
        self
    }

    /// Selected seat ids in selection order.
    pub fn selected_seat_ids(&self) -> &[String] {
        &self.selected_seat_ids
    }

    pub fn ticket_lines(&self) -> &[TicketLine] {
        &self.ticket_lines
    }

    pub fn cart(&self) -> &[ConcessionLine] {
        &self.cart
    }

    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.values()
    }

    pub fn is_selected(&self, seat_id: &str) -> bool {
        self.selected_seat_ids.iter().any(|id| id == seat_id)
    }

    /// Select or deselect a seat. Deselecting is always allowed;
    /// selecting requires the seat to exist in the catalog and to be
    /// available, and is silently ignored once the cap is reached.
    ///
    /// Selection order reflects the most recent selections: a seat
    /// that is deselected and picked again moves to the end of
    /// [`selected_seat_ids`](Self::selected_seat_ids). Toggling twice
    /// restores the selection's membership, not its order.
    pub fn toggle_seat(&mut self, seat_id: &str) {
        if let Some(pos) = self.selected_seat_ids.iter().position(|id| id == seat_id) {
            self.selected_seat_ids.remove(pos);
            return;
        }
        let Some(seat) = self.seats.get(seat_id) else {
            debug!("toggle_seat ignored: unknown seat {}", seat_id);
            return;
        };
        if !seat.is_selectable() {
            return;
        }
        if self.selected_seat_ids.len() >= self.max_selections {
            debug!("toggle_seat ignored: selection cap {} reached", self.max_selections);
            return;
        }
        self.selected_seat_ids.push(seat_id.to_string());
    }

    /// Upsert a ticket line; quantity 0 removes it. Keeping seat count
    /// and ticket count reconciled is NOT this method's job; that
    /// happens in [`validate_for_checkout`](Self::validate_for_checkout).
    pub fn set_ticket_quantity(&mut self, ticket_type_id: &str, quantity: u32) {
        if quantity == 0 {
            self.ticket_lines.retain(|l| l.ticket_type_id != ticket_type_id);
            return;
        }
        match self
            .ticket_lines
            .iter_mut()
            .find(|l| l.ticket_type_id == ticket_type_id)
        {
            Some(line) => line.quantity = quantity,
            None => self.ticket_lines.push(TicketLine {
                ticket_type_id: ticket_type_id.to_string(),
                quantity,
            }),
        }
    }

    /// Add `quantity` units of a product to the cart, merging with an
    /// existing line for the same product id.
    pub fn add_concession(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.cart.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity += quantity,
            None => self.cart.push(ConcessionLine { product, quantity }),
        }
    }

    pub fn remove_concession(&mut self, product_id: &str) {
        self.cart.retain(|l| l.product.id != product_id);
    }

    /// Set the absolute quantity of a cart line; 0 removes it. Unknown
    /// product ids are ignored (use [`add_concession`](Self::add_concession)
    /// to introduce a new line).
    pub fn set_concession_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_concession(product_id);
            return;
        }
        if let Some(line) = self.cart.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Derive the money breakdown from the current selection. A ticket
    /// line whose type id is no longer in the catalog contributes 0:
    /// stale references degrade, they do not fail.
    pub fn totals(&self) -> Totals {
        let ticket_count = self.ticket_lines.iter().map(|l| l.quantity).sum();
        let ticket_total = self
            .ticket_lines
            .iter()
            .map(|l| match self.ticket_types.get(&l.ticket_type_id) {
                Some(tt) => tt.price * Decimal::from(l.quantity),
                None => Decimal::ZERO,
            })
            .sum();
        let concession_regular_total = self
            .cart
            .iter()
            .map(|l| l.product.price * Decimal::from(l.quantity))
            .sum();
        let concession_discounted_total: Decimal = self
            .cart
            .iter()
            .map(|l| l.product.effective_price() * Decimal::from(l.quantity))
            .sum();
        Totals {
            ticket_count,
            ticket_total,
            concession_regular_total,
            concession_discounted_total,
            grand_total: ticket_total + concession_discounted_total,
        }
    }

    /// The one place where the seat/ticket reconciliation invariant is
    /// enforced. Checks run in the order the user fills the flow:
    /// seats first, then tickets, then the count comparison.
    pub fn validate_for_checkout(&self) -> CheckoutValidation {
        let seat_count = self.selected_seat_ids.len();
        let ticket_count: u32 = self.ticket_lines.iter().map(|l| l.quantity).sum();
        if seat_count == 0 {
            return CheckoutValidation::NoSeatsSelected;
        }
        if ticket_count == 0 {
            return CheckoutValidation::NoTicketsSelected;
        }
        if seat_count as u32 != ticket_count {
            return CheckoutValidation::SeatTicketMismatch {
                seat_count,
                ticket_count,
            };
        }
        CheckoutValidation::Ok
    }

    /// Build the summary handed to the order gateway. Callers should
    /// check [`validate_for_checkout`](Self::validate_for_checkout) first.
    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary {
            seat_ids: self.selected_seat_ids.clone(),
            ticket_lines: self.ticket_lines.clone(),
            concession_items: self.cart.clone(),
            grand_total: self.totals().grand_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SeatKind, SeatStatus};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn catalog_seats() -> Vec<Seat> {
        vec![
            Seat::new("A", 1, SeatKind::Standard, SeatStatus::Available),
            Seat::new("A", 2, SeatKind::Standard, SeatStatus::Available),
            Seat::new("A", 3, SeatKind::Standard, SeatStatus::Occupied),
            Seat::new("B", 1, SeatKind::Vip, SeatStatus::Available),
            Seat::new("B", 2, SeatKind::Accessible, SeatStatus::Disabled),
        ]
    }

    fn ticket_types() -> Vec<TicketType> {
        vec![
            TicketType::new("adult", "Adult", Decimal::from(1000)),
            TicketType::new("child", "Child", Decimal::from(600)),
        ]
    }

    fn engine() -> SelectionEngine {
        SelectionEngine::new(catalog_seats(), ticket_types())
    }

    #[test]
    fn toggle_selects_then_deselects() {
        let mut e = engine();
        e.toggle_seat("A1");
        assert_eq!(e.selected_seat_ids(), ["A1"]);
        assert!(e.is_selected("A1"));
        e.toggle_seat("A1");
        assert!(!e.is_selected("A1"));
        assert!(e.selected_seat_ids().is_empty());
    }

    #[test]
    fn occupied_and_disabled_seats_are_never_selected() {
        let mut e = engine();
        e.toggle_seat("A3");
        e.toggle_seat("B2");
        assert!(e.selected_seat_ids().is_empty());
    }

    #[test]
    fn unknown_seat_id_is_a_no_op() {
        let mut e = engine();
        e.toggle_seat("Z99");
        assert!(e.selected_seat_ids().is_empty());
    }

    #[test]
    fn selection_cap_is_a_silent_no_op() {
        let mut e = engine().with_max_selections(2);
        e.toggle_seat("A1");
        e.toggle_seat("A2");
        e.toggle_seat("B1");
        assert_eq!(e.selected_seat_ids(), ["A1", "A2"]);
        // Deselecting past the cap still works.
        e.toggle_seat("A1");
        e.toggle_seat("B1");
        assert_eq!(e.selected_seat_ids(), ["A2", "B1"]);
    }

    #[test]
    fn ticket_quantity_zero_removes_the_line() {
        let mut e = engine();
        e.set_ticket_quantity("adult", 2);
        e.set_ticket_quantity("child", 1);
        e.set_ticket_quantity("adult", 0);
        assert_eq!(e.ticket_lines().len(), 1);
        assert_eq!(e.ticket_lines()[0].ticket_type_id, "child");
    }

    #[test]
    fn stale_ticket_type_contributes_zero() {
        let mut e = engine();
        e.set_ticket_quantity("adult", 1);
        e.set_ticket_quantity("gone", 4);
        let totals = e.totals();
        assert_eq!(totals.ticket_count, 5);
        assert_eq!(totals.ticket_total, Decimal::from(1000));
    }

    #[test]
    fn concession_discount_flows_into_grand_total() {
        let mut e = engine();
        e.set_ticket_quantity("adult", 2);
        let combo = Product::new("combo", "Combo", Decimal::from(800)).with_discount(20);
        e.add_concession(combo, 1);
        let totals = e.totals();
        assert_eq!(totals.ticket_total, Decimal::from(2000));
        assert_eq!(totals.concession_regular_total, Decimal::from(800));
        assert_eq!(totals.concession_discounted_total, Decimal::from(640));
        assert_eq!(totals.grand_total, Decimal::from(2640));
    }

    #[test]
    fn add_concession_merges_lines_and_set_is_absolute() {
        let mut e = engine();
        let soda = Product::new("soda", "Soda", Decimal::from(300));
        e.add_concession(soda.clone(), 1);
        e.add_concession(soda, 2);
        assert_eq!(e.cart().len(), 1);
        assert_eq!(e.cart()[0].quantity, 3);
        e.set_concession_quantity("soda", 1);
        assert_eq!(e.cart()[0].quantity, 1);
        e.set_concession_quantity("soda", 0);
        assert!(e.cart().is_empty());
    }

    #[test]
    fn checkout_validation_covers_all_outcomes() {
        let mut e = engine();
        assert_eq!(e.validate_for_checkout(), CheckoutValidation::NoSeatsSelected);

        e.toggle_seat("A1");
        assert_eq!(e.validate_for_checkout(), CheckoutValidation::NoTicketsSelected);

        e.set_ticket_quantity("adult", 2);
        assert_eq!(
            e.validate_for_checkout(),
            CheckoutValidation::SeatTicketMismatch {
                seat_count: 1,
                ticket_count: 2,
            }
        );

        e.toggle_seat("A2");
        assert_eq!(e.validate_for_checkout(), CheckoutValidation::Ok);
    }

    #[test]
    fn end_to_end_two_adults() {
        let mut e = engine();
        e.toggle_seat("A1");
        e.toggle_seat("A2");
        e.set_ticket_quantity("adult", 2);
        assert!(e.validate_for_checkout().is_ok());
        assert_eq!(e.totals().ticket_total, Decimal::from(2000));

        let summary = e.order_summary();
        assert_eq!(summary.seat_ids, ["A1", "A2"]);
        assert_eq!(summary.grand_total, Decimal::from(2000));
    }

    #[test]
    fn reselecting_a_seat_appends_in_selection_order() {
        let mut e = engine();
        e.toggle_seat("A1");
        e.toggle_seat("A2");
        e.toggle_seat("A1");
        e.toggle_seat("A1");
        // Membership is back to {A1, A2}; the re-selected seat now
        // sits at the end of the selection order.
        assert_eq!(e.selected_seat_ids(), ["A2", "A1"]);
        assert!(e.is_selected("A1") && e.is_selected("A2"));
    }

    proptest! {
        /// Toggling the same seat twice always restores the selection
        /// set's membership, whatever came before. Order within the
        /// set is not part of the contract: re-selection appends.
        #[test]
        fn toggle_twice_is_identity(
            warmup in proptest::collection::vec(0usize..5, 0..8),
            target in 0usize..5,
        ) {
            let ids = ["A1", "A2", "A3", "B1", "B2"];
            let mut e = engine();
            for i in warmup {
                e.toggle_seat(ids[i]);
            }
            let before: BTreeSet<String> =
                e.selected_seat_ids().iter().cloned().collect();
            e.toggle_seat(ids[target]);
            e.toggle_seat(ids[target]);
            let after: BTreeSet<String> =
                e.selected_seat_ids().iter().cloned().collect();
            prop_assert_eq!(after, before);
        }

        /// ticket_count always equals the sum of the currently held
        /// line quantities, for any sequence of set/unset operations.
        #[test]
        fn ticket_count_matches_lines(
            ops in proptest::collection::vec((0usize..3, 0u32..6), 0..20),
        ) {
            let types = ["adult", "child", "gone"];
            let mut e = engine();
            for (idx, qty) in ops {
                e.set_ticket_quantity(types[idx], qty);
            }
            let expected: u32 = e.ticket_lines().iter().map(|l| l.quantity).sum();
            prop_assert_eq!(e.totals().ticket_count, expected);
            // No zero-quantity lines are ever retained.
            prop_assert!(e.ticket_lines().iter().all(|l| l.quantity > 0));
        }

        /// With seats and tickets both present, validation is Ok
        /// exactly when the counts match.
        #[test]
        fn mismatch_iff_counts_differ(seats in 1usize..4, tickets in 1u32..6) {
            let ids = ["A1", "A2", "B1"];
            let mut e = engine();
            for id in ids.iter().take(seats) {
                e.toggle_seat(id);
            }
            e.set_ticket_quantity("adult", tickets);
            let verdict = e.validate_for_checkout();
            if seats as u32 == tickets {
                prop_assert_eq!(verdict, CheckoutValidation::Ok);
            } else {
                prop_assert_eq!(
                    verdict,
                    CheckoutValidation::SeatTicketMismatch {
                        seat_count: seats,
                        ticket_count: tickets,
                    }
                );
            }
        }
    }
}
