//! Provider response shapes.
//!
//! Every field is optional and decoded leniently: a value of the wrong type
//! reads as absent instead of failing the whole payload. Defaulting to the
//! engine's placeholder values happens in the aggregators.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::ProviderQuery;

/// Decode a payload, falling back to its empty default on a shape mismatch.
pub fn decode<T: DeserializeOwned + Default>(query: ProviderQuery, value: Value) -> T {
    match serde_json::from_value(value) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(query = %query, error = %e, "Unexpected payload shape, applying defaults");
            T::default()
        }
    }
}

/// Decode a top-level JSON array, dropping elements that are not objects.
pub fn decode_list<T: DeserializeOwned>(query: ProviderQuery, value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => lenient::collect(items),
        Value::Null => Vec::new(),
        other => {
            warn!(query = %query, kind = %json_kind(&other), "Expected an array payload");
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn as_number(value: &Value) -> Option<f64> {
        let n = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        n.filter(|v| v.is_finite())
    }

    pub fn collect<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
        items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(as_number(&value))
    }

    pub fn integer<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(as_number(&value).map(|v| v as i64))
    }

    /// Non-empty strings only; an empty string reads as absent.
    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(match value {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
    }

    pub fn object<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(d)?;
        Ok(serde_json::from_value(value).ok())
    }

    pub fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(d)?;
        Ok(match value {
            Value::Array(items) => collect(items),
            _ => Vec::new(),
        })
    }
}

// token-metadata: [{ onChainMetadata.metadata, legacyMetadata }]

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataEntry {
    #[serde(default, deserialize_with = "lenient::object")]
    pub on_chain_metadata: Option<OnChainMetadata>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub legacy_metadata: Option<LegacyMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OnChainMetadata {
    #[serde(default, deserialize_with = "lenient::object")]
    pub metadata: Option<OnChainFields>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OnChainFields {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub decimals: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyMetadata {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub symbol: Option<String>,
    #[serde(default, rename = "logoURI", deserialize_with = "lenient::text")]
    pub logo_uri: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub decimals: Option<f64>,
}

// token-security: getAccountInfo (jsonParsed)

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountInfoResponse {
    #[serde(default, deserialize_with = "lenient::object")]
    pub result: Option<AccountInfoResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountInfoResult {
    #[serde(default, deserialize_with = "lenient::object")]
    pub value: Option<AccountInfoValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountInfoValue {
    #[serde(default, deserialize_with = "lenient::object")]
    pub data: Option<AccountData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountData {
    #[serde(default, deserialize_with = "lenient::object")]
    pub parsed: Option<ParsedAccount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParsedAccount {
    #[serde(default, deserialize_with = "lenient::object")]
    pub info: Option<MintInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintInfo {
    #[serde(default, deserialize_with = "lenient::text")]
    pub mint_authority: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub freeze_authority: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub supply: Option<String>,
}

impl AccountInfoResponse {
    pub fn mint_info(self) -> Option<MintInfo> {
        self.result?.value?.data?.parsed?.info
    }
}

// token-market: { data: { price, priceChange24hPercent, mc, ... } }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketResponse {
    #[serde(default, deserialize_with = "lenient::object")]
    pub data: Option<MarketData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price_change24h_percent: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub mc: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub liquidity: Option<f64>,
    #[serde(default, rename = "v24hUSD", deserialize_with = "lenient::number")]
    pub v24h_usd: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub holder: Option<f64>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub created_at: Option<i64>,
}

// token-holders: { data: { items: [{ owner, uiAmount }] } }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HoldersResponse {
    #[serde(default, deserialize_with = "lenient::object")]
    pub data: Option<HoldersData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HoldersData {
    #[serde(default, deserialize_with = "lenient::list")]
    pub items: Vec<HolderItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub owner: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub ui_amount: Option<f64>,
}

impl HoldersResponse {
    pub fn into_items(self) -> Vec<HolderItem> {
        self.data.map(|d| d.items).unwrap_or_default()
    }
}

// wallet-balances: { nativeBalance, tokens: [{ mint, symbol, amount, decimals }] }

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancesResponse {
    #[serde(default, deserialize_with = "lenient::number")]
    pub native_balance: Option<f64>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub tokens: Vec<TokenBalance>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenBalance {
    #[serde(default, deserialize_with = "lenient::text")]
    pub mint: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub symbol: Option<String>,
    /// Raw amount in base units
    #[serde(default, deserialize_with = "lenient::number")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub decimals: Option<f64>,
}

// wallet-transactions: [{ signature, timestamp, feePayer, tokenTransfers: [{ toUserAccount, mint }] }]

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub signature: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub timestamp: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub fee_payer: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub token_transfers: Vec<TokenTransfer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    #[serde(default, deserialize_with = "lenient::text")]
    pub to_user_account: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub mint: Option<String>,
}

// trending / new-listing: { data: { items: [...] } }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingResponse {
    #[serde(default, deserialize_with = "lenient::object")]
    pub data: Option<ListingData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingData {
    #[serde(default, deserialize_with = "lenient::list")]
    pub items: Vec<ListingItem>,
    // Some trending endpoints use `tokens` instead of `items`
    #[serde(default, deserialize_with = "lenient::list")]
    pub tokens: Vec<ListingItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price_change24h_percent: Option<f64>,
    #[serde(default, rename = "v24hUSD", deserialize_with = "lenient::number")]
    pub v24h_usd: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub liquidity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub mc: Option<f64>,
    #[serde(default, rename = "logoURI", deserialize_with = "lenient::text")]
    pub logo_uri: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub created_at: Option<i64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rank: Option<f64>,
}

impl ListingResponse {
    pub fn into_items(self) -> Vec<ListingItem> {
        match self.data {
            Some(data) if !data.items.is_empty() => data.items,
            Some(data) => data.tokens,
            None => Vec::new(),
        }
    }
}
