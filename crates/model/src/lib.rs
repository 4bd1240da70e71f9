//! Document model builder.
//!
//! Validates and normalizes the raw form payload into a render-ready
//! [`varsel_idf::DocumentTree`], resolving gear warnings by canonical id
//! and enforcing the satellite-phone rule. Validation failures abort
//! generation before any layout work happens.

mod builder;
pub mod gear;
mod request;

pub use builder::{ValidationError, build};
pub use request::{IntentionsRequest, MemberRecord, TimeRangeInput};
