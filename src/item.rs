use std::fmt::{self, Display};

/// Assumed capacity of a single vending-machine slot, in units.
pub const SLOT_CAPACITY: u32 = 8;

/// Accumulated stock counts for one beverage across every slot, in every
/// machine, that holds it.
///
/// An `Item` is created by [`Report`](crate::Report) the first time a
/// beverage name is seen during aggregation, and updated by each further
/// slot bearing that name. The stored fields are raw sums; the interesting
/// numbers ([`Item::sold`], [`Item::sold_pct`], [`Item::stock_need`]) are
/// derived on demand.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Item {
    pub name: String,
    /// Total units placed across all slots at the last restocking.
    pub stocked: u32,
    /// Total units currently remaining across all slots.
    pub in_stock: u32,
    /// Number of distinct slots holding this beverage.
    pub slots: u32,
}

impl Item {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Units sold since the last restocking.
    ///
    /// Saturates at zero: a slot topped up between snapshots can report
    /// more in stock than was last stocked.
    #[must_use]
    pub fn sold(&self) -> u32 {
        self.stocked.saturating_sub(self.in_stock)
    }

    /// Fraction of stocked units sold, in `0.0..=1.0`.
    ///
    /// A beverage that was never stocked has sold nothing, so this is
    /// defined as `0.0` when `stocked` is zero (which also sorts such
    /// items last under the descending percent-sold order).
    #[must_use]
    pub fn sold_pct(&self) -> f64 {
        if self.stocked == 0 {
            0.0
        } else {
            f64::from(self.sold()) / f64::from(self.stocked)
        }
    }

    /// Units needed to refill every slot of this beverage to
    /// [`SLOT_CAPACITY`].
    #[must_use]
    pub fn stock_need(&self) -> u32 {
        (SLOT_CAPACITY * self.slots).saturating_sub(self.in_stock)
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} In Stock: {}, Stocked: {}, Slots: {}",
            self.name, self.in_stock, self.stocked, self.slots
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(stocked: u32, in_stock: u32, slots: u32) -> Item {
        Item {
            name: "Cola".into(),
            stocked,
            in_stock,
            slots,
        }
    }

    #[test]
    fn sold_fn_is_stocked_minus_in_stock() {
        assert_eq!(item(24, 16, 3).sold(), 8);
        assert_eq!(item(8, 8, 1).sold(), 0);
    }

    #[test]
    fn sold_fn_saturates_when_slot_was_topped_up() {
        assert_eq!(item(8, 10, 1).sold(), 0);
    }

    #[test]
    fn stock_need_fn_refills_each_slot_to_capacity() {
        assert_eq!(item(8, 2, 1).stock_need(), 6);
        assert_eq!(item(24, 16, 3).stock_need(), 8);
    }

    #[test]
    fn sold_pct_fn_is_fraction_of_stocked_units() {
        let cola = item(24, 16, 3);
        assert!((cola.sold_pct() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn sold_pct_fn_is_zero_for_never_stocked_item() {
        assert_eq!(item(0, 4, 1).sold_pct(), 0.0);
    }
}
