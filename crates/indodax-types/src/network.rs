//! Withdrawal network normalization
//!
//! Callers tend to name chains loosely ("Ethereum", "BSC", "TRON"). The trade API
//! expects its own short network codes, so free-form input is mapped onto those
//! codes before it is sent. Anything not recognized passes through unchanged.

/// Known aliases and the exchange network code they map to
const ALIASES: &[(&[&str], &str)] = &[
    (&["erc20", "erc-20", "eth", "ethereum"], "erc20"),
    (&["bep20", "bep-20", "bsc", "bnb smart chain", "binance smart chain"], "bep20"),
    (&["trc20", "trc-20", "trx", "tron"], "trc20"),
    (&["polygon", "matic", "pol"], "polygon"),
    (&["sol", "solana", "spl"], "sol"),
    (&["arbitrum", "arb", "arbitrum one"], "arbitrum"),
    (&["optimism", "op"], "optimism"),
    (&["base"], "base"),
    (&["avaxc", "avax-c", "avalanche", "avalanche c-chain"], "avaxc"),
];

/// Inputs meaning "the currency's own chain"
const NATIVE_ALIASES: &[&str] = &["native", "mainnet"];

/// Map a free-form network name to the exchange's network code for `currency`.
///
/// Matching is case-insensitive and ignores surrounding whitespace. `native` and
/// `mainnet` resolve to the currency id itself. Unknown names are returned as given.
pub fn normalize_network(currency: &str, network: &str) -> String {
    let key = network.trim().to_ascii_lowercase();

    if NATIVE_ALIASES.contains(&key.as_str()) {
        return currency.trim().to_ascii_lowercase();
    }

    ALIASES
        .iter()
        .find(|(aliases, _)| aliases.contains(&key.as_str()))
        .map(|(_, code)| (*code).to_string())
        .unwrap_or_else(|| network.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_aliases() {
        assert_eq!(normalize_network("usdt", "Ethereum"), "erc20");
        assert_eq!(normalize_network("usdt", "ERC-20"), "erc20");
        assert_eq!(normalize_network("usdt", " BSC "), "bep20");
        assert_eq!(normalize_network("usdt", "TRON"), "trc20");
        assert_eq!(normalize_network("usdc", "matic"), "polygon");
        assert_eq!(normalize_network("usdc", "Solana"), "sol");
    }

    #[test]
    fn test_native_resolves_to_currency() {
        assert_eq!(normalize_network("BTC", "native"), "btc");
        assert_eq!(normalize_network("xrp", "Mainnet"), "xrp");
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(normalize_network("ada", "Cardano"), "Cardano");
        assert_eq!(normalize_network("ada", "ada"), "ada");
    }
}
