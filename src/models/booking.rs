use serde::{Deserialize, Serialize};

/// The booking sheet's linear wizard. Back navigation decrements one step,
/// there is no forward skip, and a freshly opened sheet always starts at
/// `SelectLocation`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    SelectLocation,
    Review,
    Checkout,
}

impl BookingStep {
    pub fn number(&self) -> u8 {
        match self {
            Self::SelectLocation => 1,
            Self::Review => 2,
            Self::Checkout => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::SelectLocation),
            2 => Some(Self::Review),
            3 => Some(Self::Checkout),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::SelectLocation => Self::Review,
            Self::Review => Self::Checkout,
            Self::Checkout => Self::Checkout,
        }
    }

    pub fn back(self) -> Self {
        match self {
            Self::SelectLocation => Self::SelectLocation,
            Self::Review => Self::SelectLocation,
            Self::Checkout => Self::Review,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Checkout)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SelectLocation => "Select location",
            Self::Review => "Review",
            Self::Checkout => "Checkout",
        }
    }
}

impl Default for BookingStep {
    fn default() -> Self {
        Self::SelectLocation
    }
}
