//! JSON-file-backed inventory store.
//!
//! Track item quantities in memory, check for low stock, and persist the
//! whole map to a JSON file with an atomic write.
//!
//! ```rust,no_run
//! use stockbook::Inventory;
//!
//! # fn main() -> stockbook::Result<()> {
//! let mut inv = Inventory::new();
//! inv.add("apple", 10)?;
//! inv.remove("apple", 3)?;
//! assert_eq!(inv.quantity("apple")?, 7);
//! inv.save("inventory.json")?;
//! # Ok(())
//! # }
//! ```
//!
//! **Single-process, single-caller.** There is no locking; if multiple
//! processes write the same file they will clobber each other. Serialize
//! access yourself or use a real database.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod persist;
pub mod store;

pub use error::{Error, Result};
pub use store::{Inventory, DEFAULT_PATH};
