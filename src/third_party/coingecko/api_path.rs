use const_format::concatcp;

// Root
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

// Paths
pub const COINGECKO_MARKETS_API_PATH: &str = "/coins/markets";

// Query: USD, largest first, one page of 10, no sparklines
pub const COINGECKO_MARKETS_QUERY: &str =
    "?vs_currency=usd&order=market_cap_desc&per_page=10&page=1&sparkline=false";

// Endpoints
pub const COINGECKO_MARKETS_API: &str = concatcp!(
    COINGECKO_API_URL,
    COINGECKO_MARKETS_API_PATH,
    COINGECKO_MARKETS_QUERY
);
