pub mod deal;
pub use deal::*;

pub mod manager;
pub use manager::*;

pub mod order;
pub use order::*;

pub mod slot;
pub use slot::*;
