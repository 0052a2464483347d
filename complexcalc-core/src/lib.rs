pub mod complex;
pub mod display;
pub mod error;

pub use complex::Complex;
pub use error::{ComplexError, ComplexResult};
