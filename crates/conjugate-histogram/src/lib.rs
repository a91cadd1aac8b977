//! Frequency tables for count data
//!
//! Count models are checked visually with spike histograms: one vertical
//! line per observed value, its height the value's relative frequency.
//! This crate produces the data for those plots without rendering them.
//!
//! # Example
//!
//! ```rust
//! use conjugate_histogram::frequency_table;
//!
//! let counts = [0, 0, 1, 2, 0, 1, 6];
//! let table = frequency_table(&counts).unwrap();
//! for bin in table.bins() {
//!     println!("{bin}");
//! }
//! assert_eq!(table.mode(), Some(0));
//! ```

pub mod builders;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::ExactValues;
pub use traits::FrequencyTableBuilder;
pub use types::{FrequencyBin, FrequencyTable};

/// Create a frequency table with one bin per distinct value
pub fn frequency_table(data: &[u64]) -> conjugate_core::Result<FrequencyTable> {
    ExactValues.build(data)
}
