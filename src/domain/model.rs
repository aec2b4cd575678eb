//! 後端資源的 DTO。全部都是伺服器狀態的快照，客戶端不持有權威資料。

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// DRF 的 DecimalField 可能以字串 (`"12000.00"`) 或數字回傳
mod decimal {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    fn parse<E: Error>(raw: Raw) -> Result<f64, E> {
        match raw {
            Raw::Num(n) => Ok(n),
            Raw::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid decimal: {}", s))),
        }
    }

    pub fn required<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        parse(Raw::deserialize(d)?)
    }

    pub fn optional<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        match Option::<Raw>::deserialize(d)? {
            Some(raw) => parse(raw).map(Some),
            None => Ok(None),
        }
    }
}

/// `null` 與缺欄位都視為空字串
fn nullable_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

fn nullable_vec<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(d)?.unwrap_or_default())
}

fn default_true() -> bool {
    true
}

/// 清單端點的回應：分頁 envelope (`{"results": [...]}`) 或直接陣列
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Paged {
        #[serde(default = "Vec::new")]
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        next: Option<String>,
    },
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Bare(items) => items,
            ListResponse::Paged { results, .. } => results,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CsrfToken {
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name_uz: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name_ru: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub icon: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name_uz: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name_ru: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description_uz: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description_ru: String,
    #[serde(deserialize_with = "decimal::required")]
    pub price: f64,
    #[serde(default, deserialize_with = "decimal::optional")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    pub category: u64,
    #[serde(default, deserialize_with = "nullable_string")]
    pub category_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub category_name_uz: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub category_name_ru: String,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub ingredients_uz: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub ingredients_ru: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Served,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Served => "served",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "served" => Ok(OrderStatus::Served),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            other => Err(format!(
                "unknown order status '{}' (expected pending, preparing, ready, served or cancelled)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub id: u64,
    pub menu_item: u64,
    #[serde(default, deserialize_with = "nullable_string")]
    pub menu_item_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub menu_item_name_uz: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub menu_item_name_ru: String,
    pub quantity: u32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(deserialize_with = "decimal::required")]
    pub price: f64,
    #[serde(deserialize_with = "decimal::required")]
    pub total_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: u64,
    pub table_number: u32,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "decimal::required")]
    pub total: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: u64,
    pub menu_item: u64,
    #[serde(default, deserialize_with = "nullable_string")]
    pub menu_item_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub menu_item_name_uz: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub menu_item_name_ru: String,
    #[serde(default)]
    pub menu_item_image: Option<String>,
    #[serde(deserialize_with = "decimal::required")]
    pub menu_item_price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(deserialize_with = "decimal::required")]
    pub price: f64,
    #[serde(deserialize_with = "decimal::required")]
    pub total_price: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub id: u64,
    #[serde(default, deserialize_with = "nullable_string")]
    pub session_key: String,
    #[serde(default)]
    pub table_number: Option<u32>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default, deserialize_with = "decimal::required")]
    pub total_price: f64,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Cart {
    /// 伺服器尚未建立購物車時使用的空購物車
    pub fn empty() -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: 0,
            session_key: String::new(),
            table_number: None,
            customer_name: None,
            notes: None,
            total_items: 0,
            total_price: 0.0,
            items: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promotion {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title_uz: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title_ru: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description_uz: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description_ru: String,
    #[serde(default)]
    pub discount_type: Option<String>,
    #[serde(default, deserialize_with = "decimal::optional")]
    pub discount_percentage: Option<f64>,
    #[serde(default, deserialize_with = "decimal::optional")]
    pub discount_amount: Option<f64>,
    #[serde(default)]
    pub bonus_info: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub display_image: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "default_true", alias = "active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_expired: bool,
    #[serde(default, alias = "category")]
    pub promotion_category: Option<u64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub linked_product: Option<u64>,
    #[serde(default)]
    pub linked_product_name: Option<String>,
    #[serde(default, deserialize_with = "decimal::optional")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "decimal::optional")]
    pub discounted_price: Option<f64>,
    #[serde(default)]
    pub discount_display: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub surname: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub comment: String,
    pub rating: u8,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub deleted: bool,
}

impl Review {
    /// 公開頁面只顯示已核准且未刪除的評論
    pub fn is_public(&self) -> bool {
        self.approved && !self.deleted
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewActionKind {
    Approved,
    Rejected,
    Deleted,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewAction {
    pub id: u64,
    pub review: Review,
    pub action: ReviewActionKind,
    #[serde(default)]
    pub admin_user: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    pub id: u64,
    #[serde(default, deserialize_with = "nullable_string")]
    pub feedback_type: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub message: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuStats {
    pub total_categories: u64,
    pub total_menu_items: u64,
    pub available_menu_items: u64,
    pub total_promotions: u64,
    pub total_reviews: u64,
    #[serde(default, deserialize_with = "decimal::required")]
    pub average_rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteSettings {
    pub id: u64,
    pub site_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub site_name_uz: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub site_name_ru: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub favicon: Option<String>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub address: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub address_uz: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub address_ru: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub working_hours: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub working_hours_uz: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub working_hours_ru: String,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub telegram_url: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<String>,
    #[serde(default)]
    pub is_maintenance_mode: bool,
    #[serde(default)]
    pub maintenance_message: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextContent {
    pub id: u64,
    pub content_type: String,
    pub key: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub title_uz: Option<String>,
    #[serde(default)]
    pub subtitle_uz: Option<String>,
    #[serde(default)]
    pub description_uz: Option<String>,
    #[serde(default)]
    pub content_uz: Option<String>,
    #[serde(default)]
    pub title_ru: Option<String>,
    #[serde(default)]
    pub subtitle_ru: Option<String>,
    #[serde(default)]
    pub description_ru: Option<String>,
    #[serde(default)]
    pub content_ru: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_text_uz: Option<String>,
    #[serde(default)]
    pub button_text_ru: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// 首頁與「關於我們」區塊使用的文字，三種語言各一份
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RestaurantInfo {
    pub id: u64,
    pub restaurant_name: String,
    pub restaurant_name_uz: String,
    pub restaurant_name_ru: String,
    pub about_title: String,
    pub about_title_uz: String,
    pub about_title_ru: String,
    pub about_description_1: String,
    pub about_description_1_uz: String,
    pub about_description_1_ru: String,
    pub about_description_2: String,
    pub about_description_2_uz: String,
    pub about_description_2_ru: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_subtitle_uz: String,
    pub hero_subtitle_ru: String,
    pub view_menu_button: String,
    pub view_menu_button_uz: String,
    pub view_menu_button_ru: String,
    pub go_to_menu_button: String,
    pub go_to_menu_button_uz: String,
    pub go_to_menu_button_ru: String,
    pub reviews_title: String,
    pub reviews_title_uz: String,
    pub reviews_title_ru: String,
    pub leave_review_title: String,
    pub leave_review_title_uz: String,
    pub leave_review_title_ru: String,
    pub first_name_label: String,
    pub first_name_label_uz: String,
    pub first_name_label_ru: String,
    pub last_name_label: String,
    pub last_name_label_uz: String,
    pub last_name_label_ru: String,
    pub comment_label: String,
    pub comment_label_uz: String,
    pub comment_label_ru: String,
    pub rate_us_label: String,
    pub rate_us_label_uz: String,
    pub rate_us_label_ru: String,
    pub submit_button: String,
    pub submit_button_uz: String,
    pub submit_button_ru: String,
    pub no_reviews_text: String,
    pub no_reviews_text_uz: String,
    pub no_reviews_text_ru: String,
    pub hero_image: Option<String>,
    pub about_image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

// ---------------------------------------------------------------------------
// 寫入用 payload
// ---------------------------------------------------------------------------

/// 建立或部分更新分類；`None` 的欄位不送出
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_uz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuItemFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_uz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_uz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients_uz: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients_ru: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PromotionFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_uz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_uz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_category: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOrderItem {
    pub menu_item: u64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOrder {
    pub table_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct StatusUpdate {
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddToCart {
    pub menu_item_id: u64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderFromCart {
    pub table_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReview {
    pub name: String,
    pub surname: String,
    pub comment: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewFeedback {
    pub feedback_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}
