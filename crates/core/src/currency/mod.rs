//! Rate tables, conversion, validation and display formatting.

pub mod conversion;
pub mod error;
pub mod forex;
pub mod symbols;
pub mod table;

#[cfg(test)]
mod props;

pub use conversion::{convert_via_base, format_amount, parse_amount, round_amount, validate_amount};
pub use error::ConversionError;
pub use forex::Forex;
pub use symbols::{SymbolError, SymbolTable};
pub use table::{RateTable, SupportedSet, normalize_code};
