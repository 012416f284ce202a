use std::fmt;

/// Why a swap request cannot be quoted.
#[derive(Debug, Clone, PartialEq)]
pub enum SwapError {
    MissingFrom,
    MissingTo,
    SameToken(String),
    MissingAmount,
    InvalidAmount(String),
    AboveMaximum { amount: f64, max: f64 },
    UnknownToken(String),
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFrom => write!(f, "select a token to swap from"),
            Self::MissingTo => write!(f, "select a token to swap to"),
            Self::SameToken(sym) => write!(f, "cannot swap {sym} for itself"),
            Self::MissingAmount => write!(f, "enter an amount"),
            Self::InvalidAmount(raw) => write!(f, "'{raw}' is not a positive amount"),
            Self::AboveMaximum { amount, max } => {
                write!(f, "amount {amount} exceeds maximum limit ({max})")
            }
            Self::UnknownToken(sym) => write!(f, "no price available for {sym}"),
        }
    }
}

impl std::error::Error for SwapError {}
