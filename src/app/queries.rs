//! 單一 endpoint 的查詢物件，各自保存 loading / error / data。
//!
//! 所有查詢共用一個 `QueryCache`：TTL 內重複 `fetch()` 直接拿快取，
//! `refetch()` 一定重新請求。錯誤只寫進查詢自己的 state，不往外丟。

use crate::core::cache::QueryCache;
use crate::domain::model::{Category, ListResponse, MenuItem, Promotion, RestaurantInfo, Review, SiteSettings};
use crate::domain::ports::JsonSource;
use crate::utils::error::{ApiError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// 把原始 JSON 轉成查詢的資料型別
pub type Select<T> = fn(Value) -> Result<T>;

#[derive(Debug, Clone)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<Arc<ApiError>>,
    pub last_fetched: Option<Instant>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            last_fetched: None,
        }
    }
}

pub struct Query<T> {
    name: &'static str,
    endpoint: String,
    source: Arc<dyn JsonSource>,
    cache: Arc<QueryCache>,
    select: Select<T>,
    state: QueryState<T>,
}

impl<T> Query<T> {
    pub fn new(
        name: &'static str,
        endpoint: impl Into<String>,
        source: Arc<dyn JsonSource>,
        cache: Arc<QueryCache>,
        select: Select<T>,
    ) -> Self {
        Self {
            name,
            endpoint: endpoint.into(),
            source,
            cache,
            select,
            state: QueryState::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn state(&self) -> &QueryState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data.as_ref()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.state.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// 快取還新鮮就不發請求
    pub async fn fetch(&mut self) -> &QueryState<T> {
        self.run(false).await
    }

    pub async fn refetch(&mut self) -> &QueryState<T> {
        tracing::debug!("{}: force refetch", self.name);
        self.run(true).await
    }

    async fn run(&mut self, force: bool) -> &QueryState<T> {
        self.state.loading = true;
        self.state.error = None;

        let source = Arc::clone(&self.source);
        let endpoint = self.endpoint.clone();
        let select = self.select;
        let result = self
            .cache
            .get_or_fetch(&self.endpoint, force, || async move { source.get_json(&endpoint).await })
            .await
            .and_then(|value| select(Value::clone(&value)));

        match result {
            Ok(data) => {
                self.state.data = Some(data);
                self.state.last_fetched = Some(Instant::now());
            }
            Err(e) => {
                // 保留上一次成功的資料
                tracing::error!("{}: Error fetching {}: {}", self.name, self.endpoint, e);
                self.state.error = Some(Arc::new(e));
            }
        }

        self.state.loading = false;
        &self.state
    }
}

pub fn select_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>> {
    Ok(serde_json::from_value::<ListResponse<T>>(value)?.into_vec())
}

pub fn select_object<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// 空回應（`null`）視為沒有資料
pub fn select_optional<T: DeserializeOwned>(value: Value) -> Result<Option<T>> {
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

fn select_public_reviews(value: Value) -> Result<Vec<Review>> {
    Ok(select_list::<Review>(value)?
        .into_iter()
        .filter(Review::is_public)
        .collect())
}

/// 建立各種查詢；所有查詢共用同一個 source 與快取
#[derive(Clone)]
pub struct Queries {
    source: Arc<dyn JsonSource>,
    cache: Arc<QueryCache>,
}

impl Queries {
    pub fn new(source: Arc<dyn JsonSource>, cache: Arc<QueryCache>) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    fn query<T>(&self, name: &'static str, endpoint: impl Into<String>, select: Select<T>) -> Query<T> {
        Query::new(name, endpoint, Arc::clone(&self.source), Arc::clone(&self.cache), select)
    }

    /// 前台：只有啟用中的分類
    pub fn categories(&self) -> Query<Vec<Category>> {
        self.query("categories", "/categories/", select_list::<Category>)
    }

    /// 後台：包含停用的分類
    pub fn admin_categories(&self) -> Query<Vec<Category>> {
        self.query("admin-categories", "/categories/?show_all=true", select_list::<Category>)
    }

    pub fn menu_items(&self) -> Query<Vec<MenuItem>> {
        self.query("menu-items", "/menu-items/?show_all=true", select_list::<MenuItem>)
    }

    /// 與 `menu_items` 同一個 endpoint，因此共用快取
    pub fn admin_menu_items(&self) -> Query<Vec<MenuItem>> {
        self.query("admin-menu-items", "/menu-items/?show_all=true", select_list::<MenuItem>)
    }

    pub fn menu_item(&self, id: u64) -> Query<MenuItem> {
        self.query("menu-item", format!("/menu-items/{}/", id), select_object::<MenuItem>)
    }

    pub fn promotions(&self) -> Query<Vec<Promotion>> {
        self.query("promotions", "/promotions/", select_list::<Promotion>)
    }

    /// 只留下已核准且未刪除的評論
    pub fn reviews(&self) -> Query<Vec<Review>> {
        self.query("reviews", "/reviews/", select_public_reviews)
    }

    pub fn restaurant_info(&self) -> Query<Option<RestaurantInfo>> {
        self.query("restaurant-info", "/restaurant-info/", select_optional::<RestaurantInfo>)
    }

    pub fn site_settings(&self) -> Query<Option<SiteSettings>> {
        self.query("site-settings", "/site-settings/", select_optional::<SiteSettings>)
    }
}
