//! Token registry primitives.
//!
//! Tokens are the numbered slots a kiosk hands out. The registry is a fixed
//! table built once per process; the deposit store decides whether a slot is
//! currently in use.

use std::collections::HashSet;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use super::DepositRecord;

/// Number of slots the kiosk advertises when reporting availability.
///
/// Stats are computed against this constant rather than the registry size.
pub const TOTAL_TOKEN_SLOTS: usize = 20;

const SECRET_LEN: usize = 6;

const STANDARD_TOKENS: [(i64, &str); TOTAL_TOKEN_SLOTS] = [
    (1001, "IFUD7D"),
    (1002, "FIZD0V"),
    (1003, "YQVP14"),
    (1004, "Z55BWY"),
    (1005, "CEJ88E"),
    (1006, "CKLK5K"),
    (1007, "RFQSZI"),
    (1008, "XM4543"),
    (1009, "244YOE"),
    (1010, "1AC4NU"),
    (1011, "WUNLKM"),
    (1012, "PNVMTV"),
    (1013, "YDSARN"),
    (1014, "PT6UHX"),
    (1015, "YLEYDO"),
    (1016, "DFS7FL"),
    (1017, "PEUSRX"),
    (1018, "9284O3"),
    (1019, "95FKXI"),
    (1020, "ORD1ED"),
];

static STANDARD_REGISTRY: LazyLock<Arc<TokenRegistry>> = LazyLock::new(|| {
    Arc::new(TokenRegistry {
        tokens: STANDARD_TOKENS
            .iter()
            .map(|(number, secret)| Token {
                number: TokenNumber(*number),
                secret: (*secret).to_owned(),
            })
            .collect(),
    })
});

/// Printed number identifying a token slot.
///
/// Any integer is representable so lookups for unknown numbers can fail with
/// `NotFound` instead of a parse error.
///
/// # Examples
/// ```
/// use sewavault::domain::TokenNumber;
///
/// let number: TokenNumber = "1001".parse().expect("numeric");
/// assert_eq!(number, TokenNumber::new(1001));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenNumber(i64);

impl TokenNumber {
    /// Wrap a raw token number.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw numeric value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for TokenNumber {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TokenNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TokenNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A registered token: number plus the secret printed into its barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    number: TokenNumber,
    secret: String,
}

impl Token {
    /// Build a token, validating the secret format.
    pub fn new(
        number: TokenNumber,
        secret: impl Into<String>,
    ) -> Result<Self, TokenValidationError> {
        let secret = secret.into();
        let well_formed = secret.len() == SECRET_LEN
            && secret
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
        if !well_formed {
            return Err(TokenValidationError::MalformedSecret { number });
        }
        Ok(Self { number, secret })
    }

    /// Token number.
    #[must_use]
    pub fn number(&self) -> TokenNumber {
        self.number
    }

    /// Secret printed into the token's barcode.
    #[must_use]
    pub fn secret(&self) -> &str {
        self.secret.as_str()
    }

    /// Text encoded in the token's barcode, `ABX_{number}_{secret}_RSSB`.
    #[must_use]
    pub fn barcode_data(&self) -> String {
        format!("ABX_{}_{}_RSSB", self.number, self.secret)
    }
}

/// Validation failures raised while building tokens or registries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenValidationError {
    /// Secret is not six upper-case alphanumerics.
    #[error("token {number} has a malformed secret")]
    MalformedSecret {
        /// Offending token.
        number: TokenNumber,
    },
    /// The same number appears twice.
    #[error("token {number} is registered more than once")]
    DuplicateNumber {
        /// Offending token.
        number: TokenNumber,
    },
}

/// Read-only table of valid tokens.
///
/// # Examples
/// ```
/// use sewavault::domain::{TokenNumber, TokenRegistry};
///
/// let registry = TokenRegistry::standard();
/// assert!(registry.exists(TokenNumber::new(1001)));
/// assert!(registry.lookup(TokenNumber::new(9999)).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRegistry {
    tokens: Vec<Token>,
}

impl TokenRegistry {
    /// Build a registry from an explicit token list.
    pub fn new(tokens: Vec<Token>) -> Result<Self, TokenValidationError> {
        let mut seen = HashSet::with_capacity(tokens.len());
        if let Some(duplicate) = tokens.iter().find(|token| !seen.insert(token.number)) {
            return Err(TokenValidationError::DuplicateNumber {
                number: duplicate.number,
            });
        }
        Ok(Self { tokens })
    }

    /// The process-wide kiosk registry, tokens 1001 to 1020.
    #[must_use]
    pub fn standard() -> Arc<Self> {
        Arc::clone(&STANDARD_REGISTRY)
    }

    /// Find a token by number.
    #[must_use]
    pub fn lookup(&self, number: TokenNumber) -> Option<&Token> {
        self.tokens.iter().find(|token| token.number == number)
    }

    /// Whether `number` is registered.
    #[must_use]
    pub fn exists(&self, number: TokenNumber) -> bool {
        self.lookup(number).is_some()
    }

    /// All tokens in registration order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the registry holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Token joined with its current deposit, computed per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    /// Token number.
    pub token_number: TokenNumber,
    /// Secret printed into the barcode.
    pub secret: String,
    /// Full barcode text.
    pub barcode_data: String,
    /// Whether a deposit is currently held.
    pub is_in_use: bool,
    /// The held deposit, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit: Option<DepositRecord>,
}

impl TokenRecord {
    /// Join a registry entry with the store's view of it.
    #[must_use]
    pub fn join(token: &Token, deposit: Option<DepositRecord>) -> Self {
        Self {
            token_number: token.number(),
            secret: token.secret().to_owned(),
            barcode_data: token.barcode_data(),
            is_in_use: deposit.is_some(),
            deposit,
        }
    }
}

/// Occupancy summary shown on the kiosk home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStats {
    /// Tokens currently holding a deposit.
    pub in_use: usize,
    /// Slots left out of [`TOTAL_TOKEN_SLOTS`].
    pub available: usize,
}

impl TokenStats {
    /// Derive stats from the number of held deposits.
    #[must_use]
    pub const fn from_in_use(in_use: usize) -> Self {
        Self {
            in_use,
            available: TOTAL_TOKEN_SLOTS.saturating_sub(in_use),
        }
    }
}
