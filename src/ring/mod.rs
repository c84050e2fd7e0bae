pub mod args;
pub use args::*;

pub mod session;
pub use session::*;
