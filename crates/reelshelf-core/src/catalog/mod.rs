//! Movie catalog: category index, input validation, search.

mod store;
pub mod validation;

pub use store::Catalog;
pub use validation::MISSING_INPUT_MESSAGE;
