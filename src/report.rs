use anyhow::{Context, Result};
use serde::Deserialize;

use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use crate::item::Item;

/// Holds aggregated inventory data.
///
/// To create a new, empty `Report`, use [`Report::new`].
///
/// To add data, feed it machine snapshot files with [`Report::read_json`].
///
/// Once every snapshot has been read, take ownership of the per-beverage
/// totals with [`Report::into_items`] and hand them to
/// [`prompt::run`](crate::prompt::run) (or sort and print them yourself).
#[derive(Debug, Default)]
pub struct Report {
    items: BTreeMap<String, Item>,
}

impl Report {
    /// Creates a new, empty report.
    #[must_use]
    pub fn new() -> Report {
        Self::default()
    }

    /// Reads one machine snapshot from the JSON file at `path`, and
    /// updates the report.
    ///
    /// Every slot in the snapshot contributes its `last_stock` and
    /// `current_stock` counts, and one slot, to the totals for its
    /// beverage. The order in which snapshots, rows, or slots are
    /// processed does not affect the final totals.
    ///
    /// # Errors
    ///
    /// Returns any errors from opening or parsing the file, including a
    /// missing `contents` field or missing per-slot fields. An error
    /// leaves the report in an unspecified, partially-updated state;
    /// callers are expected to abort rather than keep aggregating.
    pub fn read_json(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::open(&path)
            .with_context(|| format!("{}", path.as_ref().display()))?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("{}", path.as_ref().display()))?;
        for row in snapshot.contents {
            for slot in row.slots {
                let item = self
                    .items
                    .entry(slot.item_name.clone())
                    .or_insert_with(|| Item::new(slot.item_name));
                item.stocked += slot.last_stock;
                item.in_stock += slot.current_stock;
                item.slots += 1;
            }
        }
        Ok(())
    }

    /// Consumes the report, returning the per-beverage totals in name
    /// order.
    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.items.into_values().collect()
    }
}

/// Defines the JSON format for a machine snapshot: rows of slots.
#[derive(Debug, Deserialize)]
struct Snapshot {
    contents: Vec<Row>,
}

#[derive(Debug, Deserialize)]
struct Row {
    slots: Vec<Slot>,
}

#[derive(Debug, Deserialize)]
struct Slot {
    item_name: String,
    last_stock: u32,
    current_stock: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(paths: &[&str]) -> Vec<Item> {
        let mut report = Report::new();
        for path in paths {
            report.read_json(path).unwrap();
        }
        report.into_items()
    }

    #[test]
    fn read_json_fn_correctly_aggregates_one_snapshot() {
        let items = totals(&["testdata/reid_1f.json"]);
        assert_eq!(items.len(), 3, "wrong number of beverages");
        let cola = &items[0];
        assert_eq!(cola.name, "Cola");
        assert_eq!(cola.stocked, 8);
        assert_eq!(cola.in_stock, 3);
        assert_eq!(cola.slots, 1);
    }

    #[test]
    fn read_json_fn_sums_the_same_beverage_across_snapshots() {
        let items = totals(&[
            "testdata/reid_1f.json",
            "testdata/reid_2f.json",
            "testdata/reid_3f.json",
        ]);
        let cola = items.iter().find(|i| i.name == "Cola").unwrap();
        assert_eq!(cola.stocked, 24);
        assert_eq!(cola.in_stock, 16);
        assert_eq!(cola.slots, 3);
        assert_eq!(cola.sold(), 8);
        assert!((cola.sold_pct() - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(cola.stock_need(), 8);
    }

    #[test]
    fn read_json_fn_totals_are_order_independent() {
        let forward = totals(&[
            "testdata/reid_1f.json",
            "testdata/reid_2f.json",
            "testdata/reid_3f.json",
        ]);
        let reverse = totals(&[
            "testdata/reid_3f.json",
            "testdata/reid_2f.json",
            "testdata/reid_1f.json",
        ]);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn read_json_fn_counts_every_slot_holding_a_beverage() {
        let items = totals(&["testdata/reid_2f.json"]);
        let water = items.iter().find(|i| i.name == "Water").unwrap();
        assert_eq!(water.slots, 2, "Water appears in two slots on 2F");
        assert_eq!(water.stocked, 16);
        assert_eq!(water.in_stock, 9);
    }

    #[test]
    fn read_json_fn_returns_error_for_missing_file() {
        let mut report = Report::new();
        assert!(report.read_json("testdata/no_such_machine.json").is_err());
    }

    #[test]
    fn read_json_fn_returns_error_for_malformed_json() {
        let mut report = Report::new();
        assert!(report.read_json("testdata/malformed.json").is_err());
    }

    #[test]
    fn read_json_fn_returns_error_when_contents_field_is_missing() {
        let mut report = Report::new();
        assert!(report.read_json("testdata/no_contents.json").is_err());
    }

    #[test]
    fn into_items_fn_returns_items_in_name_order() {
        let items = totals(&["testdata/reid_1f.json"]);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Cola", "Iced Tea", "Water"]);
    }
}
