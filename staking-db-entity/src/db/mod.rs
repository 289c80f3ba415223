pub mod staking_protocol;
