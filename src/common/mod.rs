pub use envelope::*;
pub use errors::*;
pub use pagination::*;

mod envelope;
mod errors;
mod pagination;
