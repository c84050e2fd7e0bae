pub mod change;
pub use change::*;

pub mod gate;
pub use gate::*;

pub mod signal;
pub use signal::*;
