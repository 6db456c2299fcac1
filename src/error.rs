use num_bigint::BigInt;

pub type Result<T> = std::result::Result<T, ShamirRecoverError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShamirRecoverError {
    InvalidDigit { digit: char, base: u32 },
    InvalidBase(u32),
    InvalidThreshold(usize),
    InsufficientShares { have: usize, need: usize },
    CoincidentAbscissas { x: u64 },
    DivisionByZero,
    NonIntegralResult { numer: BigInt, denom: BigInt },
    MalformedRecord(String),
    Io(String),
}

impl std::error::Error for ShamirRecoverError {}

impl core::fmt::Display for ShamirRecoverError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShamirRecoverError::InvalidDigit { digit, base } => {
                write!(f, "invalid digit '{}' for base {}", digit, base)
            }
            ShamirRecoverError::InvalidBase(base) => {
                write!(f, "unsupported base {} (must be within 2..=36)", base)
            }
            ShamirRecoverError::InvalidThreshold(k) => {
                write!(f, "invalid threshold k={} (must be at least 1)", k)
            }
            ShamirRecoverError::InsufficientShares { have, need } => {
                write!(f, "not enough shares: have {}, need {}", have, need)
            }
            ShamirRecoverError::CoincidentAbscissas { x } => {
                write!(f, "two shares have the same index x={}", x)
            }
            ShamirRecoverError::DivisionByZero => write!(f, "division by zero"),
            ShamirRecoverError::NonIntegralResult { numer, denom } => {
                write!(f, "interpolated value {}/{} is not an integer", numer, denom)
            }
            ShamirRecoverError::MalformedRecord(msg) => write!(f, "malformed share record: {}", msg),
            ShamirRecoverError::Io(msg) => write!(f, "io error: {}", msg),
        }
    }
}

impl From<std::io::Error> for ShamirRecoverError {
    fn from(err: std::io::Error) -> Self {
        ShamirRecoverError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ShamirRecoverError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            ShamirRecoverError::Io(err.to_string())
        } else {
            ShamirRecoverError::MalformedRecord(err.to_string())
        }
    }
}
