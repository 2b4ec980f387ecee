//! Per-session record of chosen menu items and their quantities.

use std::collections::BTreeMap;

use crate::models::ItemId;

/// Tracks how many units of each menu item the user intends to order.
///
/// Entries always hold a positive quantity; a decrement at quantity 1
/// removes the entry instead of storing 0. Created empty for each
/// browsing session and discarded after checkout.
#[derive(Clone, Debug, Default)]
pub struct SelectionLedger {
    quantities: BTreeMap<ItemId, u32>,
}

impl SelectionLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of the item, creating the entry at 1 if absent.
    pub fn increment(&mut self, item: ItemId) {
        *self.quantities.entry(item).or_insert(0) += 1;
    }

    /// Removes one unit of the item.
    ///
    /// At quantity 1 the entry is dropped entirely; with no entry this is
    /// a no-op, so the ledger can never hold a zero or negative quantity.
    pub fn decrement(&mut self, item: ItemId) {
        match self.quantities.get_mut(&item) {
            Some(qty) if *qty > 1 => *qty -= 1,
            Some(_) => {
                self.quantities.remove(&item);
            }
            None => {}
        }
    }

    /// Stored quantity for the item, or 0 if none is selected.
    pub fn quantity_of(&self, item: ItemId) -> u32 {
        self.quantities.get(&item).copied().unwrap_or(0)
    }

    /// Sum of all selected quantities.
    pub fn total_selected(&self) -> u32 {
        self.quantities.values().sum()
    }

    /// Returns whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Selected (item, quantity) pairs in ascending item order.
    pub fn lines(&self) -> impl Iterator<Item = (ItemId, u32)> + '_ {
        self.quantities.iter().map(|(&id, &qty)| (id, qty))
    }

    /// Discards every selection.
    pub fn clear(&mut self) {
        self.quantities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_creates_entry_at_one() {
        let mut ledger = SelectionLedger::new();
        ledger.increment(101);
        assert_eq!(ledger.quantity_of(101), 1);
        assert_eq!(ledger.total_selected(), 1);
    }

    #[test]
    fn increment_twice_then_decrement() {
        let mut ledger = SelectionLedger::new();
        ledger.increment(101);
        ledger.increment(101);
        ledger.decrement(101);
        assert_eq!(ledger.quantity_of(101), 1);
        assert_eq!(ledger.total_selected(), 1);
    }

    #[test]
    fn decrement_at_one_removes_entry() {
        let mut ledger = SelectionLedger::new();
        ledger.increment(201);
        ledger.decrement(201);
        assert_eq!(ledger.quantity_of(201), 0);
        assert!(ledger.is_empty());
        assert_eq!(ledger.lines().count(), 0);
    }

    #[test]
    fn decrement_on_empty_ledger_is_noop() {
        let mut ledger = SelectionLedger::new();
        ledger.decrement(999);
        assert!(ledger.is_empty());
        assert_eq!(ledger.quantity_of(999), 0);
    }

    #[test]
    fn quantity_never_goes_negative() {
        let mut ledger = SelectionLedger::new();
        ledger.increment(101);
        ledger.decrement(101);
        ledger.decrement(101);
        ledger.decrement(101);
        assert_eq!(ledger.quantity_of(101), 0);
        ledger.increment(101);
        assert_eq!(ledger.quantity_of(101), 1);
    }

    #[test]
    fn total_matches_sum_of_quantities() {
        let mut ledger = SelectionLedger::new();
        ledger.increment(101);
        ledger.increment(101);
        ledger.increment(201);
        ledger.increment(302);
        ledger.decrement(201);
        let sum: u32 = [101, 201, 302]
            .iter()
            .map(|&id| ledger.quantity_of(id))
            .sum();
        assert_eq!(ledger.total_selected(), sum);
        assert_eq!(ledger.total_selected(), 3);
    }

    #[test]
    fn lines_iterate_in_ascending_item_order() {
        let mut ledger = SelectionLedger::new();
        ledger.increment(302);
        ledger.increment(101);
        ledger.increment(201);
        let ids: Vec<_> = ledger.lines().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![101, 201, 302]);
    }

    #[test]
    fn clear_discards_everything() {
        let mut ledger = SelectionLedger::new();
        ledger.increment(101);
        ledger.increment(201);
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_selected(), 0);
    }
}
