//! Validator operator address (bech32, `nibivaloper` prefix)
//!
//! Used by delegated feeders that post prices on behalf of a validator.

use std::fmt;

use bech32::primitives::decode::{CheckedHrpstring, CheckedHrpstringError};
use bech32::{Bech32, Hrp};
use thiserror::Error;

/// Human-readable part of validator operator addresses on Nibiru
pub const VALIDATOR_ADDRESS_PREFIX: &str = "nibivaloper";

/// Upper bound on decoded address length accepted by the chain
const MAX_ADDRESS_LEN: usize = 255;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("empty address string is not allowed")]
    Empty,

    #[error("invalid bech32: {0}")]
    Bech32(#[from] CheckedHrpstringError),

    #[error("invalid Bech32 prefix; expected {expected}, got {got}")]
    WrongPrefix { expected: &'static str, got: String },

    #[error("address length must be 1-{max} bytes, got {0}", max = MAX_ADDRESS_LEN)]
    InvalidLength(usize),
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ValAddress {
    bytes: Vec<u8>,
}

impl ValAddress {
    /// Decode a classic bech32 validator address, checking the prefix and
    /// length. Bech32m checksums are rejected.
    pub fn from_bech32(address: &str) -> Result<Self, AddressError> {
        if address.trim().is_empty() {
            return Err(AddressError::Empty);
        }

        let checked = CheckedHrpstring::new::<Bech32>(address)?;
        let prefix = checked.hrp().to_lowercase();
        if prefix != VALIDATOR_ADDRESS_PREFIX {
            return Err(AddressError::WrongPrefix {
                expected: VALIDATOR_ADDRESS_PREFIX,
                got: prefix,
            });
        }

        Self::from_bytes(checked.byte_iter().collect())
    }

    fn from_bytes(bytes: Vec<u8>) -> Result<Self, AddressError> {
        if bytes.is_empty() || bytes.len() > MAX_ADDRESS_LEN {
            return Err(AddressError::InvalidLength(bytes.len()));
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for ValAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hrp = Hrp::parse(VALIDATOR_ADDRESS_PREFIX).map_err(|_| fmt::Error)?;
        let encoded = bech32::encode::<Bech32>(hrp, &self.bytes).map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

impl fmt::Debug for ValAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValAddress({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(prefix: &str, bytes: &[u8]) -> String {
        bech32::encode::<Bech32>(Hrp::parse(prefix).unwrap(), bytes).unwrap()
    }

    #[test]
    fn test_decode_valid_address() {
        let raw = [7u8; 20];
        let addr = ValAddress::from_bech32(&encode(VALIDATOR_ADDRESS_PREFIX, &raw)).unwrap();
        assert_eq!(addr.as_bytes(), &raw);
    }

    #[test]
    fn test_display_round_trips() {
        let encoded = encode(VALIDATOR_ADDRESS_PREFIX, &[1, 2, 3, 4, 5]);
        let addr = ValAddress::from_bech32(&encoded).unwrap();
        assert_eq!(addr.to_string(), encoded);
    }

    #[test]
    fn test_uppercase_address_accepted() {
        let encoded = encode(VALIDATOR_ADDRESS_PREFIX, &[9u8; 20]).to_uppercase();
        assert!(ValAddress::from_bech32(&encoded).is_ok());
    }

    #[test]
    fn test_bech32m_checksum_rejected() {
        let hrp = Hrp::parse(VALIDATOR_ADDRESS_PREFIX).unwrap();
        let encoded = bech32::encode::<bech32::Bech32m>(hrp, &[7u8; 20]).unwrap();
        assert!(matches!(
            ValAddress::from_bech32(&encoded),
            Err(AddressError::Bech32(_))
        ));
    }

    #[test]
    fn test_account_prefix_rejected() {
        let result = ValAddress::from_bech32(&encode("nibi", &[7u8; 20]));
        assert!(matches!(result, Err(AddressError::WrongPrefix { .. })));
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let mut encoded = encode(VALIDATOR_ADDRESS_PREFIX, &[7u8; 20]);
        let last = encoded.pop().unwrap();
        encoded.push(if last == 'q' { 'p' } else { 'q' });
        assert!(matches!(
            ValAddress::from_bech32(&encoded),
            Err(AddressError::Bech32(_))
        ));
    }

    #[test]
    fn test_garbage_and_empty_rejected() {
        assert!(matches!(ValAddress::from_bech32(""), Err(AddressError::Empty)));
        assert!(ValAddress::from_bech32("not-an-address").is_err());
    }

    #[test]
    fn test_empty_payload_rejected() {
        let result = ValAddress::from_bech32(&encode(VALIDATOR_ADDRESS_PREFIX, &[]));
        assert!(matches!(result, Err(AddressError::InvalidLength(0))));
    }
}
