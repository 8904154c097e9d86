//! Distribution math: CDFs, quantiles, and the special functions behind
//! them.
//!
//! Everything in this module is a pure, stateless numeric function.
//! Degenerate inputs produce NaN sentinels instead of panics; boundary
//! validation belongs to the API layer above.

pub mod chi_squared;
pub mod normal;
pub mod special;
pub mod student_t;
