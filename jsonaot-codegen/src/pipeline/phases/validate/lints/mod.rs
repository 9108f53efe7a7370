//! Built-in lints for collected types.

mod duplicate_name;
mod near_miss;

pub use duplicate_name::DuplicateNameLint;
pub use near_miss::NearMissLint;
