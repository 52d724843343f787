//! Command and query services.
//!
//! One pair per entity family, split along command/query lines: query
//! services depend only on their repository; command services additionally
//! hold the read-only contract into the other family.

pub mod auctions;
pub mod vehicles;
