/// Anything that can sit on a podium: an opaque identity compared by equality.
pub trait Token: Clone + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display {}

impl<T> Token for T where T: Clone + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display {}
