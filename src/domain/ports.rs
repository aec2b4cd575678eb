use crate::utils::error::Result;
use async_trait::async_trait;

/// 以 endpoint 取回 JSON 的來源。`ApiClient` 實作它；查詢層只依賴這個介面。
///
/// 回傳 `None` 代表伺服器沒有內容（例如 204）。
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn get_json(&self, endpoint: &str) -> Result<Option<serde_json::Value>>;
}
