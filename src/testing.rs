//! Helpers for testing queries.
//!
//! - **Assertions**: compare collected output with expected results
//! - **Fixtures**: small herds for edge cases the sample does not cover
//!
//! ```
//! use menagerie::*;
//! use menagerie::testing::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let p = Pipeline::default();
//! let out = from_vec(&p, tied_herd())
//!     .filter(Animal::is_predator)
//!     .collect_seq()?;
//! assert_collections_unordered_equal(&out, &tied_herd()[..2]);
//! # Ok(())
//! # }
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
