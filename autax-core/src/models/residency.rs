use serde::{Deserialize, Serialize};

/// Tax residency status for Australian income tax purposes.
///
/// Residents get the tax-free threshold, Medicare levy and the low income
/// tax offset; non-residents are taxed from the first dollar and pay no
/// Medicare levy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Residency {
    Resident,
    NonResident,
}

impl Residency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resident => "R",
            Self::NonResident => "N",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "R" => Some(Self::Resident),
            "N" => Some(Self::NonResident),
            _ => None,
        }
    }

    pub fn is_resident(&self) -> bool {
        matches!(self, Self::Resident)
    }
}
