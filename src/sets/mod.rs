//! Predicates over sets of arguments.
//!
//! Sets are given as slices of argument ids, without duplicates.

mod grounded;
pub use grounded::grounded_extension;

mod predicates;
pub use predicates::attacks_all_outside;
pub use predicates::characteristic_function;
pub use predicates::defends;
pub use predicates::extend_to_maximal;
pub use predicates::is_admissible;
pub use predicates::is_conflict_free;
pub use predicates::is_extensible_with;
