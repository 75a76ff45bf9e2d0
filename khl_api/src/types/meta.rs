use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Server-reported pagination state for a list response.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PageInfo {
    pub page: i64,
    pub page_total: i64,
    pub page_size: i64,
    pub total: i64,
}

/// The `data` of a list-shaped response: the items, still undecoded, and
/// the page they belong to.
#[derive(Deserialize, Debug)]
pub struct ListEnvelope {
    pub items: Box<RawValue>,
    pub meta: PageInfo,
}
