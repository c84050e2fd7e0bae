use colored::*;

/// Orders the ringmaster can shout at the animals.
///
/// Only the two work podiums are ever touched:
///
/// - `LO`: top of the left podium jumps onto the right one
/// - `KI`: top of the right podium jumps onto the left one
/// - `MA`: bottom of the left podium climbs to its top
/// - `NI`: bottom of the right podium climbs to its top
/// - `SO`: the two tops swap places
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Order {
    LO,
    KI,
    MA,
    NI,
    SO,
}

impl Order {
    pub const fn all() -> [Self; 5] {
        [Self::LO, Self::KI, Self::MA, Self::NI, Self::SO]
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::LO => "LO",
            Self::KI => "KI",
            Self::MA => "MA",
            Self::NI => "NI",
            Self::SO => "SO",
        }
    }
    /// Short description shown next to the order.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LO => "Lo : G>D",
            Self::KI => "Ki : G<D",
            Self::MA => "Ma :  ^G",
            Self::NI => "Ni :  ^D",
            Self::SO => "So : <->",
        }
    }
}

impl TryFrom<&str> for Order {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        Self::all()
            .into_iter()
            .find(|o| o.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("unknown order: {}", s))
    }
}

impl crate::Arbitrary for Order {
    fn random() -> Self {
        Self::all()[rand::random_range(0..Self::all().len())]
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::LO => write!(f, "{}", self.name().yellow()),
            Self::KI => write!(f, "{}", self.name().green()),
            Self::MA => write!(f, "{}", self.name().cyan()),
            Self::NI => write!(f, "{}", self.name().blue()),
            Self::SO => write!(f, "{}", self.name().magenta()),
        }
    }
}
