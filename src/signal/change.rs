/// Old and new value of an observable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Change<V> {
    pub old: V,
    pub new: V,
}

impl<V> Change<V> {
    pub fn new(old: V, new: V) -> Self {
        Self { old, new }
    }
}

impl<V: PartialEq> Change<V> {
    /// True when the value actually moved.
    pub fn is_transition(&self) -> bool {
        self.old != self.new
    }
}

impl<V: std::fmt::Debug> std::fmt::Display for Change<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {:?}", self.old, self.new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition() {
        assert!(Change::new(false, true).is_transition());
        assert!(!Change::new(Some(1), Some(1)).is_transition());
    }
}
