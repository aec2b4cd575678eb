//! 網站設定、文字內容、餐廳資訊與統計

use crate::core::client::ApiClient;
use crate::domain::model::{MenuStats, RestaurantInfo, SiteSettings, TextContent};
use crate::utils::error::Result;

impl ApiClient {
    pub async fn get_stats(&self) -> Result<MenuStats> {
        self.get("/stats/").await
    }

    pub async fn get_site_settings(&self) -> Result<SiteSettings> {
        self.get("/site-settings/").await
    }

    pub async fn get_text_content(&self) -> Result<Vec<TextContent>> {
        self.get_list("/text-content/").await
    }

    pub async fn get_text_content_by_type(&self, content_type: &str) -> Result<Vec<TextContent>> {
        let segment: String = url::form_urlencoded::byte_serialize(content_type.as_bytes()).collect();
        self.get_list(&format!("/text-content/type/{}/", segment)).await
    }

    pub async fn get_restaurant_info(&self) -> Result<RestaurantInfo> {
        self.get("/restaurant-info/").await
    }
}
