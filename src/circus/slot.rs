/// Where a podium stands in the ring.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Slot {
    WorkLeft = 0,
    WorkRight = 1,
    GoalLeft = 2,
    GoalRight = 3,
}

impl Slot {
    pub const fn all() -> [Self; 4] {
        [Self::WorkLeft, Self::WorkRight, Self::GoalLeft, Self::GoalRight]
    }
    pub fn is_work(&self) -> bool {
        matches!(self, Self::WorkLeft | Self::WorkRight)
    }
    /// The podium this one is compared against to decide completion.
    pub fn counterpart(&self) -> Self {
        match self {
            Self::WorkLeft => Self::GoalLeft,
            Self::WorkRight => Self::GoalRight,
            Self::GoalLeft => Self::WorkLeft,
            Self::GoalRight => Self::WorkRight,
        }
    }
}

impl From<Slot> for usize {
    fn from(s: Slot) -> usize {
        s as usize
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::WorkLeft => write!(f, "work/left"),
            Self::WorkRight => write!(f, "work/right"),
            Self::GoalLeft => write!(f, "goal/left"),
            Self::GoalRight => write!(f, "goal/right"),
        }
    }
}
