//! Command implementations

mod format;
mod generate;
mod validate;

pub use format::format;
pub use generate::generate;
pub use validate::validate;
