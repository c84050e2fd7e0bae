use colored::*;

/// The circus roster. Each animal is drawn as a coloured block.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Animal {
    Lion = 0,
    Elephant = 1,
    Bear = 2,
    Mouse = 3,
    Bull = 4,
    Panther = 5,
    Tiger = 6,
    Horse = 7,
    Cow = 8,
    Cat = 9,
}

impl Animal {
    pub const fn all() -> [Self; crate::MAX_TOKENS] {
        [
            Self::Lion,
            Self::Elephant,
            Self::Bear,
            Self::Mouse,
            Self::Bull,
            Self::Panther,
            Self::Tiger,
            Self::Horse,
            Self::Cow,
            Self::Cat,
        ]
    }
    /// The first `n` animals, `n` clamped into `[MIN_TOKENS, MAX_TOKENS]`.
    pub fn roster(n: usize) -> Vec<Self> {
        Self::all()
            .into_iter()
            .take(n.clamp(crate::MIN_TOKENS, crate::MAX_TOKENS))
            .collect()
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lion => "lion",
            Self::Elephant => "elephant",
            Self::Bear => "bear",
            Self::Mouse => "mouse",
            Self::Bull => "bull",
            Self::Panther => "panther",
            Self::Tiger => "tiger",
            Self::Horse => "horse",
            Self::Cow => "cow",
            Self::Cat => "cat",
        }
    }
    pub fn color(&self) -> Color {
        match self {
            Self::Lion => Color::TrueColor {
                r: 255,
                g: 200,
                b: 0,
            },
            Self::Elephant => Color::BrightBlack,
            Self::Bear => Color::BrightWhite,
            Self::Mouse => Color::Green,
            Self::Bull => Color::Red,
            Self::Panther => Color::TrueColor {
                r: 255,
                g: 175,
                b: 175,
            },
            Self::Tiger => Color::Cyan,
            Self::Horse => Color::Yellow,
            Self::Cow => Color::Magenta,
            Self::Cat => Color::Blue,
        }
    }
}

impl From<u8> for Animal {
    fn from(n: u8) -> Self {
        Self::all()
            .get(n as usize)
            .copied()
            .expect("animal index out of roster")
    }
}
impl From<Animal> for u8 {
    fn from(a: Animal) -> u8 {
        a as u8
    }
}

impl TryFrom<&str> for Animal {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown animal: {}", s))
    }
}

impl crate::Arbitrary for Animal {
    fn random() -> Self {
        Self::from(rand::random_range(0..crate::MAX_TOKENS as u8))
    }
}

impl std::fmt::Display for Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", format!("{:^8}", self.name()).on_color(self.color()).black())
    }
}
