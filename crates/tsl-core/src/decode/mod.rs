//! Scalar decoders for the API's loosely encoded wire values.
//!
//! Each submodule pairs a plain parsing function with serde glue so the
//! model structs can point at it from a `#[serde(...)]` attribute:
//!
//! - [`truthy`]: `"yes"`, `"N"`, `"1"` and friends as `bool`
//! - [`legacy_date`]: `"March 4th, 2018 11:20 PM EST"` style timestamps (read only)
//! - [`epoch`]: seconds since the Unix epoch, both directions
//! - [`month_period`]: `yyyyMM` reporting months

pub mod epoch;
pub mod legacy_date;
pub mod month_period;
pub mod truthy;

pub use epoch::{from_epoch_millis, from_epoch_seconds, to_epoch_millis, to_epoch_seconds};
pub use legacy_date::parse_legacy_date;
pub use month_period::MonthPeriod;
pub use truthy::parse_truthy;
