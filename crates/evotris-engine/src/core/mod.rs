pub use self::{field::*, tetromino::*};

pub(crate) mod field;
pub(crate) mod tetromino;
