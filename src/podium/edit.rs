/// Structural mutation announced by a [`super::Podium`] once it is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
    Push,
    PopTop,
    PopBottom,
}

impl std::fmt::Display for Edit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Self::Push => "push",
            Self::PopTop => "pop top",
            Self::PopBottom => "pop bottom",
        })
    }
}
