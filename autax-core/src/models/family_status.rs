use serde::{Deserialize, Serialize};

/// Family status for Medicare levy threshold selection.
///
/// `Family` selects the family low-income threshold plus per-dependent
/// increments. Note that the engine still computes levies on the
/// individual's income only; combined family income is not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FamilyStatus {
    Single,
    Family,
}

impl FamilyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Family => "family",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "family" => Some(Self::Family),
            _ => None,
        }
    }
}
