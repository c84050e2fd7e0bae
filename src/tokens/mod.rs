pub mod animal;
pub use animal::*;

pub mod token;
pub use token::*;
