pub mod edit;
pub use edit::*;

pub mod podium;
pub use podium::*;
