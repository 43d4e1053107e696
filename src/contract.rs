//! Contract bindings
//!
//! ABI of the two external ledgers the dApp talks to. Only the methods the
//! client consumes are declared.

use alloy_primitives::{address, Address};
use alloy_sol_types::sol;

/// Crowdfunding ledger deployed on Alfajores
pub const CROWDFUNDING_ADDRESS: Address = address!("Eb0A9112722BC911756cb8a477d2358CaE946D11");

/// cUSD token ledger on Alfajores
pub const TOKEN_ADDRESS: Address = address!("874069Fa1Eb16D44d622F2e0Ca25eeA172369bC1");

sol! {
    interface ICrowdfunding {
        function totalProjects() external view returns (uint256 count);

        function readProject(uint256 index)
            external
            view
            returns (
                address creator,
                string memory name,
                string memory description,
                uint256 supporters,
                uint256 goal,
                uint256 invested
            );

        function addProject(string memory name, string memory description, uint256 goal) external;

        function supportProject(uint256 index) external payable;
    }

    interface IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);

        function balanceOf(address owner) external view returns (uint256 balance);
    }
}

/// Addresses a session binds its ledger client to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contracts {
    pub crowdfunding: Address,
    pub token: Address,
}

impl Default for Contracts {
    fn default() -> Self {
        Self {
            crowdfunding: CROWDFUNDING_ADDRESS,
            token: TOKEN_ADDRESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use alloy_sol_types::SolCall;

    #[test]
    fn test_selectors() {
        assert_eq!(ICrowdfunding::totalProjectsCall::SIGNATURE, "totalProjects()");
        assert_eq!(
            ICrowdfunding::readProjectCall::SIGNATURE,
            "readProject(uint256)"
        );
        assert_eq!(
            ICrowdfunding::addProjectCall::SIGNATURE,
            "addProject(string,string,uint256)"
        );
        assert_eq!(IERC20::approveCall::SIGNATURE, "approve(address,uint256)");
        assert_eq!(IERC20::approveCall::SELECTOR, [0x09, 0x5e, 0xa7, 0xb3]);
        assert_eq!(IERC20::balanceOfCall::SELECTOR, [0x70, 0xa0, 0x82, 0x31]);
    }

    #[test]
    fn test_support_calldata() {
        let data = ICrowdfunding::supportProjectCall {
            index: U256::from(2u64),
        }
        .abi_encode();
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(data[35], 2);
    }

    #[test]
    fn test_default_contracts() {
        let contracts = Contracts::default();
        assert_eq!(
            contracts.crowdfunding,
            "0xeb0a9112722bc911756cb8a477d2358cae946d11"
                .parse::<Address>()
                .unwrap()
        );
        assert_eq!(contracts.token, TOKEN_ADDRESS);
    }
}
