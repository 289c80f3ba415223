use std::collections::HashMap;

/// Network label stamped on every persisted record.
pub const CHAIN_NAME: &str = "Manta Pacific Sepolia";

pub const CATEGORY_STAKING: &str = "Staking";
pub const CATEGORY_STABLECOIN: &str = "Stablecoin";

const STABLECOIN_SYMBOLS: &[&str] = &["USDC", "USDT"];

#[derive(Clone, Debug, PartialEq)]
pub struct TokenDescriptor {
    pub symbol: String,
    pub address_token: String,
    pub address_staking: String,
    pub name_project: String,
}

impl TokenDescriptor {
    fn new(symbol: &str, address_token: &str, address_staking: &str, name_project: &str) -> Self {
        TokenDescriptor {
            symbol: symbol.to_owned(),
            address_token: address_token.to_owned(),
            address_staking: address_staking.to_owned(),
            name_project: name_project.to_owned(),
        }
    }

    pub fn id_protocol(&self) -> String {
        format!("{}_{}", self.name_project, self.symbol)
    }

    pub fn is_stablecoin(&self) -> bool {
        STABLECOIN_SYMBOLS.contains(&self.symbol.as_str())
    }

    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![CATEGORY_STAKING.to_owned()];
        if self.is_stablecoin() {
            categories.push(CATEGORY_STABLECOIN.to_owned());
        }
        categories
    }
}

/// Immutable token/logo mappings, built once at launch and shared as
/// Rocket managed state.
pub struct TokenRegistry {
    tokens: HashMap<String, TokenDescriptor>,
    logos: HashMap<String, String>,
}

impl TokenRegistry {
    pub fn bootstrap() -> Self {
        let descriptors = [
            TokenDescriptor::new(
                "UNI",
                "0x6c8D1fd3AA9F436CBA20E4b6A5aeDb1bf814A732",
                "0xa976c4930e253CE56Ff129404a95F0578345C113",
                "Uniswap",
            ),
            TokenDescriptor::new(
                "USDC",
                "0x94F0Fd09f425Be15C7Bc0575Aa71780A044039e3",
                "0x23218e77D017AD293496976A5ee9Eb3F3F5EF217",
                "AaveV3",
            ),
            TokenDescriptor::new(
                "USDT",
                "0x7598099fFC36dCC3e96F3aB33f18E86F85ae7E44",
                "0xd39ef51d10FAeE75FE6fe66537F3D8128Ec72dA5",
                "CompoundV3",
            ),
            TokenDescriptor::new(
                "DAI",
                "0x74A8Ee760959AF0B18307861e92769CfEcC42f9B",
                "0x60e78201ac487E5C382379dc8f9e39a896396728",
                "StargateV3",
            ),
            TokenDescriptor::new(
                "WETH",
                "0x3455b6B22cBD998512286428De8844CBFBcc06C2",
                "0xF50c64a2C422C6809e5BdbcF4Bb5af38D06a033a",
                "UsdxMoney",
            ),
        ];

        let logo_urls = [
            ("UNI", "https://cryptologos.cc/logos/uniswap-uni-logo.png"),
            ("USDC", "https://cryptologos.cc/logos/usd-coin-usdc-logo.png"),
            ("USDT", "https://cryptologos.cc/logos/tether-usdt-logo.png"),
            ("DAI", "https://cryptologos.cc/logos/dai-dai-logo.png"),
            (
                "WETH",
                "https://img.cryptorank.io/coins/weth1701090834118.png",
            ),
        ]
        .into_iter()
        .collect::<HashMap<_, _>>();

        let mut tokens = HashMap::new();
        let mut logos = HashMap::new();
        for descriptor in descriptors {
            if let Some(url) = logo_urls.get(descriptor.symbol.as_str()) {
                logos.insert(descriptor.address_token.to_owned(), (*url).to_owned());
            }
            tokens.insert(descriptor.symbol.to_owned(), descriptor);
        }

        TokenRegistry { tokens, logos }
    }

    pub fn get(&self, symbol: &str) -> Option<&TokenDescriptor> {
        self.tokens.get(symbol)
    }

    pub fn symbols(&self) -> Vec<String> {
        self.tokens.keys().cloned().collect()
    }

    /// Logo URL for a token address, empty string when unknown.
    pub fn logo(&self, address_token: &str) -> String {
        self.logos.get(address_token).cloned().unwrap_or_default()
    }
}
