pub mod field;
pub mod form;
pub mod layout;

pub use field::*;
pub use form::*;
pub use layout::*;
