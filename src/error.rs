//! Error type shared by the segmented control and its configuration loader.

use crate::segmented::ItemId;
use thiserror::Error;

/// Errors reported by the segmented control.
///
/// None of these are fatal to the host application. Out-of-range selections
/// and unknown items are programming mistakes in the caller; the control
/// reports them and leaves its state untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// A selection was requested for an index that has no item.
    #[error("item index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of items the control currently holds.
        len: usize,
    },

    /// A press message named an item this control does not own.
    #[error("item {0} does not belong to this control")]
    UnknownItem(ItemId),

    /// A theme file could not be parsed.
    #[error("invalid appearance configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// An appearance could not be written out as TOML.
    #[error("failed to serialize appearance: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
