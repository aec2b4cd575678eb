use crate::config::ClientConfig;
use crate::core::body::{MultipartForm, RequestBody};
use crate::core::retry::RetryPolicy;
use crate::domain::model::{CsrfToken, ListResponse};
use crate::domain::ports::JsonSource;
use crate::utils::error::{ApiError, Result};
use crate::utils::format;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.tokyokafe.uz/api";
pub const CSRF_ENDPOINT: &str = "/csrf/";
pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// 會改變伺服器狀態的方法需要 CSRF token
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Method::Get)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: RequestBody,
    pub headers: Vec<(String, String)>,
    /// false 時不解析回應 body
    pub parse_json: bool,
    /// 覆寫 policy 的重試次數
    pub retries: Option<u32>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::Get,
            body: RequestBody::Empty,
            headers: Vec::new(),
            parse_json: true,
            retries: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn with_method(method: Method, body: RequestBody) -> Self {
        Self {
            method,
            body,
            ..Self::default()
        }
    }

    pub fn post(body: RequestBody) -> Self {
        Self::with_method(Method::Post, body)
    }

    pub fn put(body: RequestBody) -> Self {
        Self::with_method(Method::Put, body)
    }

    pub fn patch(body: RequestBody) -> Self {
        Self::with_method(Method::Patch, body)
    }

    pub fn delete() -> Self {
        Self::with_method(Method::Delete, RequestBody::Empty)
    }

    pub fn no_parse(mut self) -> Self {
        self.parse_json = false;
        self
    }

    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// 餐廳後端的 REST client。
///
/// 所有請求共用同一個 cookie jar（session 與 CSRF cookie），
/// 可以 clone 後交給多個使用者；沒有全域預設實例。
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    media_host: String,
    timeout: Duration,
    retry: RetryPolicy,
    cache_busting: bool,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::from_config(&ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            media_host: config.media_host.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
            retry: config.retry_policy(),
            cache_busting: config.cache_busting,
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_busting(mut self, enabled: bool) -> Self {
        self.cache_busting = enabled;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn media_host(&self) -> &str {
        &self.media_host
    }

    /// 圖片欄位的完整 URL，見 `format::image_url`
    pub fn media_url(&self, path: Option<&str>) -> String {
        format::image_url(&self.media_host, path)
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    pub fn url_for(&self, endpoint: &str) -> Result<Url> {
        let joined = if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        };
        Url::parse(&joined).map_err(|e| ApiError::InvalidUrl {
            url: joined.clone(),
            reason: e.to_string(),
        })
    }

    /// 向 `/csrf/` 取得 token；cookie 那一半由 cookie jar 保存
    pub async fn fetch_csrf_token(&self) -> Result<String> {
        let url = self.url_for(CSRF_ENDPOINT)?;
        let request = self.http.get(url).header(ACCEPT, "application/json");

        let (status, text) = tokio::time::timeout(self.timeout, async {
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, ApiError>((status, text))
        })
        .await
        .map_err(|_| ApiError::Timeout(self.timeout))??;

        // 5xx 交給 retry policy；其餘失敗視為拿不到 token
        if status.is_server_error() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body: text,
            });
        }
        if !status.is_success() {
            return Err(ApiError::Csrf {
                message: format!("token endpoint returned {}", status),
            });
        }

        let token: CsrfToken = serde_json::from_str(&text).map_err(|e| ApiError::Csrf {
            message: format!("malformed token response: {}", e),
        })?;

        if token.csrf_token.trim().is_empty() {
            return Err(ApiError::Csrf {
                message: "token endpoint returned an empty token".to_string(),
            });
        }

        Ok(token.csrf_token)
    }

    /// 執行請求並回傳原始 JSON；204 或 `parse_json == false` 時回傳 `None`。
    ///
    /// 5xx 與傳輸失敗依 retry policy 重試，4xx 直接回傳錯誤。
    pub async fn request_value(
        &self,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<Option<serde_json::Value>> {
        let url = self.url_for(endpoint)?;
        let policy = match options.retries {
            Some(retries) => self.retry.with_max_retries(retries),
            None => self.retry,
        };

        let mut retries_used = 0;
        loop {
            match self.attempt(&url, options).await {
                Ok(value) => return Ok(value),
                Err(e) if policy.should_retry(&e, retries_used) => {
                    retries_used += 1;
                    let delay = policy.delay_for(retries_used);
                    tracing::warn!(
                        "🔄 Retrying {} {} in {:?}, attempts left: {} ({})",
                        options.method.as_str(),
                        endpoint,
                        delay,
                        policy.max_retries - retries_used + 1,
                        e
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    tracing::debug!("❌ {} {} failed: {}", options.method.as_str(), endpoint, e);
                    return Err(e);
                }
            }
        }
    }

    async fn attempt(&self, url: &Url, options: &RequestOptions) -> Result<Option<serde_json::Value>> {
        let csrf_token = if options.method.is_mutating() {
            Some(self.fetch_csrf_token().await?)
        } else {
            None
        };

        let mut request = self
            .http
            .request(options.method.to_reqwest(), url.clone())
            .header(ACCEPT, "application/json");

        if options.method == Method::Get && self.cache_busting {
            request = request
                .query(&cache_busting_params())
                .header(CACHE_CONTROL, "no-cache");
        }
        if let Some(content_type) = options.body.content_type() {
            request = request.header(CONTENT_TYPE, content_type);
        }
        if let Some(token) = &csrf_token {
            request = request.header(CSRF_HEADER, token);
        }
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request = match &options.body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.body(serde_json::to_vec(value)?),
            RequestBody::Multipart(form) => request.multipart(form.to_reqwest()?),
        };

        tracing::debug!("📡 {} {}", options.method.as_str(), url);

        let (status, text) = tokio::time::timeout(self.timeout, async {
            let response = request.send().await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, ApiError>((status, text))
        })
        .await
        .map_err(|_| ApiError::Timeout(self.timeout))??;

        tracing::debug!("📡 {} {} -> {}", options.method.as_str(), url.path(), status);

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body: text,
            });
        }

        if !options.parse_json || status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&text)?))
    }

    pub async fn request<T: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions) -> Result<T> {
        let value = self
            .request_value(endpoint, &options)
            .await?
            .unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(value)?)
    }

    /// 不解析回應的請求（多半是 DELETE）
    pub async fn request_empty(&self, endpoint: &str, options: RequestOptions) -> Result<()> {
        self.request_value(endpoint, &options.no_parse()).await?;
        Ok(())
    }

    /// 清單端點：接受 `{"results": [...]}` 或直接陣列
    pub async fn get_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>> {
        let list: ListResponse<T> = self.request(endpoint, RequestOptions::get()).await?;
        Ok(list.into_vec())
    }

    // 沒有專屬方法的 endpoint 用這些通用動詞

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request(endpoint, RequestOptions::get()).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<T> {
        self.request(endpoint, RequestOptions::post(RequestBody::json(body)?))
            .await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<T> {
        self.request(endpoint, RequestOptions::put(RequestBody::json(body)?))
            .await
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<T> {
        self.request(endpoint, RequestOptions::patch(RequestBody::json(body)?))
            .await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<()> {
        self.request_empty(endpoint, RequestOptions::delete()).await
    }

    pub async fn post_form<T: DeserializeOwned>(&self, endpoint: &str, form: MultipartForm) -> Result<T> {
        self.request(endpoint, RequestOptions::post(RequestBody::Multipart(form)))
            .await
    }

    pub async fn patch_form<T: DeserializeOwned>(&self, endpoint: &str, form: MultipartForm) -> Result<T> {
        self.request(endpoint, RequestOptions::patch(RequestBody::Multipart(form)))
            .await
    }
}

#[async_trait]
impl JsonSource for ApiClient {
    async fn get_json(&self, endpoint: &str) -> Result<Option<serde_json::Value>> {
        self.request_value(endpoint, &RequestOptions::get()).await
    }
}

/// 繞過中間快取：毫秒時間戳與隨機 token
fn cache_busting_params() -> [(&'static str, String); 2] {
    let token = uuid::Uuid::new_v4().simple().to_string();
    [
        ("t", chrono::Utc::now().timestamp_millis().to_string()),
        ("r", token[..8].to_string()),
    ]
}
