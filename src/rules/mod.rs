//! The fixed beats-relation over rock, paper and scissors.
//!
//! - [`Move`] — one of the three throws
//! - [`Outcome`] — result of one [`Move`] against another
mod outcome;
mod throw;

pub use outcome::*;
pub use throw::*;
