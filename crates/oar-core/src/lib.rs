//! oar-core: shared foundation for oarsim.
//!
//! Contains:
//! - units (uom SI types + constructors + display conversions)
//! - numeric (parameter checks + heading math)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{OarError, OarResult};
pub use numeric::*;
pub use units::*;
