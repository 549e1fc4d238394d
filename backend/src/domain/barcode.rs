//! Barcode text printed on physical tokens.
//!
//! Format: `ABX_{tokenNumber}_{secret}_RSSB`, where the number is decimal
//! digits and the secret is upper-case ASCII alphanumerics.

use serde::{Deserialize, Serialize};

use super::{Token, TokenNumber, TokenRegistry};

const PREFIX: &str = "ABX_";
const SUFFIX: &str = "_RSSB";

/// Structured view of a decoded barcode string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeData<'a> {
    number: TokenNumber,
    secret: &'a str,
}

impl<'a> BarcodeData<'a> {
    /// Parse barcode text. Returns `None` for anything off-format, including
    /// numbers that overflow.
    ///
    /// # Examples
    /// ```
    /// use sewavault::domain::{BarcodeData, TokenNumber};
    ///
    /// let parsed = BarcodeData::parse("ABX_1001_IFUD7D_RSSB").expect("well formed");
    /// assert_eq!(parsed.number(), TokenNumber::new(1001));
    /// assert_eq!(parsed.secret(), "IFUD7D");
    /// assert!(BarcodeData::parse("ABX_1001_ifud7d_RSSB").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &'a str) -> Option<Self> {
        let body = text.strip_prefix(PREFIX)?.strip_suffix(SUFFIX)?;
        let (digits, secret) = body.split_once('_')?;

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let secret_ok = !secret.is_empty()
            && secret
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if !secret_ok {
            return None;
        }

        let number = digits.parse::<i64>().ok()?;
        Some(Self {
            number: TokenNumber::new(number),
            secret,
        })
    }

    /// Token number encoded in the barcode.
    #[must_use]
    pub fn number(&self) -> TokenNumber {
        self.number
    }

    /// Secret encoded in the barcode.
    #[must_use]
    pub fn secret(&self) -> &'a str {
        self.secret
    }
}

impl TokenRegistry {
    /// Token whose number and secret both match the barcode text.
    #[must_use]
    pub fn match_barcode(&self, text: &str) -> Option<&Token> {
        let parsed = BarcodeData::parse(text)?;
        self.lookup(parsed.number())
            .filter(|token| token.secret() == parsed.secret())
    }
}

/// Outcome of resolving scanned barcode text against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeResolution {
    /// Whether the barcode matches a registered token.
    pub valid: bool,
    /// The matched token number, present only when `valid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_number: Option<TokenNumber>,
}

impl BarcodeResolution {
    /// Resolution for a barcode that matched `number`.
    #[must_use]
    pub const fn matched(number: TokenNumber) -> Self {
        Self {
            valid: true,
            token_number: Some(number),
        }
    }

    /// Resolution for an unrecognised barcode.
    #[must_use]
    pub const fn unmatched() -> Self {
        Self {
            valid: false,
            token_number: None,
        }
    }
}
