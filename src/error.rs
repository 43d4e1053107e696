//! dApp error types
//!
//! Every failure the client can hit, from a missing wallet to a reverted
//! transaction. Controller flows surface these as notification text.

use thiserror::Error;

/// Errors that can occur while talking to the wallet or the ledger
#[derive(Error, Debug)]
pub enum DappError {
    /// No wallet provider is injected into the environment
    #[error("Please install the CeloExtensionWallet")]
    WalletUnavailable,

    /// The user declined the request in the wallet
    #[error("Request rejected in wallet")]
    UserRejected,

    /// Network or node failure
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Transaction rejected by contract logic
    #[error("Transaction reverted: {0}")]
    ContractRevert(String),

    /// Malformed user input
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The ledger answered with data that does not match the contract ABI
    #[error("Malformed ledger response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for DappError {
    fn from(err: serde_json::Error) -> Self {
        DappError::Decode(err.to_string())
    }
}

impl From<alloy_sol_types::Error> for DappError {
    fn from(err: alloy_sol_types::Error) -> Self {
        DappError::Decode(err.to_string())
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for DappError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DappError::Rpc("request timed out".to_string())
        } else if err.is_connect() {
            DappError::Rpc(format!("node unreachable: {}", err))
        } else {
            DappError::Rpc(err.to_string())
        }
    }
}

/// Result type alias for dApp operations
pub type DappResult<T> = Result<T, DappError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DappError::WalletUnavailable;
        assert_eq!(err.to_string(), "Please install the CeloExtensionWallet");

        let err = DappError::ContractRevert("insufficient allowance".to_string());
        assert_eq!(
            err.to_string(),
            "Transaction reverted: insufficient allowance"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u64>("not json").unwrap_err();
        let err: DappError = json_err.into();
        assert!(matches!(err, DappError::Decode(_)));
    }
}
