//! Core inventory type.

use crate::codec;
use crate::error::{Error, Result};
use crate::persist::{atomic_write, read_file};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Default path used by the bundled driver and most callers.
pub const DEFAULT_PATH: &str = "inventory.json";

/// In-memory inventory: item name to signed quantity, persisted on demand as
/// a JSON object.
///
/// Owned, single-threaded, no interior locking. Create one per logical store
/// and pass it around; callers that need cross-thread access wrap it
/// themselves.
///
/// Quantities may go negative through [`add`](Self::add) — only
/// [`remove`](Self::remove) cleans up, deleting an entry when it drops to
/// zero or below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<String, i64>,
}

impl Inventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ---- reads ----

    /// Current quantity for `item`, or 0 if absent.
    pub fn quantity(&self, item: &str) -> Result<i64> {
        check_name(item)?;
        Ok(self.items.get(item).copied().unwrap_or(0))
    }

    /// `true` if the item has an entry.
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when the inventory has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of all entries in name order.
    #[must_use]
    pub fn items(&self) -> Vec<(String, i64)> {
        self.items.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }

    /// Item names with quantity strictly below `threshold`, in name order.
    /// An item sitting exactly at the threshold is not low.
    #[must_use]
    pub fn check_low(&self, threshold: i64) -> Vec<String> {
        self.items
            .iter()
            .filter(|&(_, &qty)| qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    // ---- writes ----

    /// Add `qty` (any sign, zero allowed) to the current quantity for `item`,
    /// creating the entry at 0 if absent. Never deletes an entry, even when
    /// the sum ends up at or below zero. Sums saturate at the `i64` bounds.
    pub fn add(&mut self, item: &str, qty: i64) -> Result<()> {
        check_name(item)?;
        let entry = self.items.entry(item.to_owned()).or_insert(0);
        *entry = entry.saturating_add(qty);
        Ok(())
    }

    /// Like [`add`](Self::add), and on success appends one timestamped line
    /// (`<timestamp>: Added <qty> of <item>`) to the caller-owned `log`.
    pub fn add_logged(&mut self, item: &str, qty: i64, log: &mut Vec<String>) -> Result<()> {
        self.add(item, qty)?;
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f");
        log.push(format!("{now}: Added {qty} of {item}"));
        Ok(())
    }

    /// Subtract `qty` from `item`. If the item is absent this is a silent
    /// no-op — a documented outcome, not a suppressed error. If the result
    /// drops to zero or below, the entry is deleted. The subtraction
    /// saturates at the `i64` bounds.
    pub fn remove(&mut self, item: &str, qty: i64) -> Result<()> {
        check_name(item)?;
        // Explicit presence check: absent items must not gain an entry here.
        if let Some(current) = self.items.get_mut(item) {
            *current = current.saturating_sub(qty);
            if *current <= 0 {
                self.items.remove(item);
            }
        }
        Ok(())
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // ---- persistence ----

    /// Replace the whole inventory with the JSON object at `path`.
    ///
    /// The file is read and decoded in full before anything is touched, so a
    /// missing file ([`Error::Io`]), malformed JSON ([`Error::Parse`]), or a
    /// shape violation ([`Error::InvalidFormat`]) leaves the in-memory state
    /// exactly as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = read_file(path.as_ref())?;
        let parsed = codec::decode(&bytes)?;
        self.items = parsed;
        Ok(())
    }

    /// Write the inventory to `path` as a 2-space-indented JSON object,
    /// replacing whatever is there (atomic temp-file + rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = codec::encode(&self.items)?;
        atomic_write(path.as_ref(), &bytes)
    }

    // ---- reporting ----

    /// Write the `Items Report` header followed by one `<item> -> <qty>`
    /// line per entry, in name order.
    pub fn report_to<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "Items Report")?;
        for (item, qty) in &self.items {
            writeln!(w, "{item} -> {qty}")?;
        }
        Ok(())
    }
}

fn check_name(item: &str) -> Result<()> {
    if item.is_empty() {
        return Err(Error::InvalidArgument(
            "item must be a non-empty string".into(),
        ));
    }
    Ok(())
}
