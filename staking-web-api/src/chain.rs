use async_trait::async_trait;
use thiserror::Error;
use web3::contract::{Contract, Options};
use web3::transports::Http;
use web3::types::{Address, U256};

/// Minimal ABI of the staking contracts: the two view functions the sync
/// routine reads.
const STAKING_ABI: &[u8] = br#"[
  {"inputs":[],"name":"fixedAPY","outputs":[{"internalType":"uint8","name":"","type":"uint8"}],"stateMutability":"view","type":"function"},
  {"inputs":[],"name":"totalAmountStaked","outputs":[{"internalType":"uint256","name":"","type":"uint256"}],"stateMutability":"view","type":"function"}
]"#;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("invalid contract address: {0}")]
    InvalidAddress(String),
    #[error("invalid staking abi: {0}")]
    Abi(#[from] web3::ethabi::Error),
    #[error("contract query failed: {0}")]
    Query(#[from] web3::contract::Error),
    #[error("returned value out of range: {0}")]
    OutOfRange(U256),
}

/// Read-only view of a staking contract. Implemented against a live node
/// by [`EvmStakingReader`] and by an in-memory mock in tests.
#[async_trait]
pub trait StakingReader: Send + Sync {
    async fn fixed_apy(&self, staking_address: &str) -> Result<u8, ChainError>;

    async fn total_amount_staked(&self, staking_address: &str) -> Result<U256, ChainError>;
}

pub struct EvmStakingReader {
    web3: web3::Web3<Http>,
}

impl EvmStakingReader {
    pub fn new(rpc_url: &str) -> Result<Self, web3::Error> {
        let transport = Http::new(rpc_url)?;
        Ok(EvmStakingReader {
            web3: web3::Web3::new(transport),
        })
    }

    fn staking_contract(&self, address: &str) -> Result<Contract<Http>, ChainError> {
        let address = address
            .parse::<Address>()
            .map_err(|_| ChainError::InvalidAddress(address.to_owned()))?;
        Ok(Contract::from_json(self.web3.eth(), address, STAKING_ABI)?)
    }
}

#[async_trait]
impl StakingReader for EvmStakingReader {
    async fn fixed_apy(&self, staking_address: &str) -> Result<u8, ChainError> {
        let contract = self.staking_contract(staking_address)?;
        let apy: U256 = contract
            .query("fixedAPY", (), None, Options::default(), None)
            .await?;
        if apy > U256::from(u8::MAX) {
            return Err(ChainError::OutOfRange(apy));
        }
        Ok(apy.low_u64() as u8)
    }

    async fn total_amount_staked(&self, staking_address: &str) -> Result<U256, ChainError> {
        let contract = self.staking_contract(staking_address)?;
        Ok(contract
            .query("totalAmountStaked", (), None, Options::default(), None)
            .await?)
    }
}
