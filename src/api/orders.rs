//! 訂單與購物車。
//!
//! 購物車綁在 session cookie 上，所以同一個 `ApiClient`（同一個 cookie jar）
//! 才會看到同一台購物車。

use crate::core::client::{ApiClient, RequestOptions};
use crate::domain::model::{
    AddToCart, Cart, CartItemUpdate, MessageResponse, NewOrder, Order, OrderFromCart, OrderStatus,
    StatusUpdate,
};
use crate::utils::error::Result;

impl ApiClient {
    pub async fn get_orders(&self) -> Result<Vec<Order>> {
        self.get_list("/orders/").await
    }

    pub async fn get_order(&self, id: u64) -> Result<Order> {
        self.get(&format!("/orders/{}/", id)).await
    }

    pub async fn create_order(&self, order: &NewOrder) -> Result<Order> {
        self.post("/orders/", order).await
    }

    pub async fn update_order_status(&self, id: u64, status: OrderStatus) -> Result<Order> {
        self.patch(&format!("/orders/{}/status/", id), &StatusUpdate { status })
            .await
    }

    /// 還沒有購物車時伺服器回 404，這裡改回傳空購物車
    pub async fn get_cart(&self) -> Result<Cart> {
        match self.get::<Cart>("/cart/").await {
            Ok(cart) => Ok(cart),
            Err(e) if e.is_not_found() => {
                tracing::debug!("No cart for this session yet, using an empty one");
                Ok(Cart::empty())
            }
            Err(e) => Err(e),
        }
    }

    pub async fn add_to_cart(&self, item: &AddToCart) -> Result<Cart> {
        self.post("/cart/add/", item).await
    }

    pub async fn update_cart_item(&self, item_id: u64, update: &CartItemUpdate) -> Result<Cart> {
        self.patch(&format!("/cart/items/{}/", item_id), update)
            .await
            .inspect_err(|e| tracing::error!("Error updating cart item {}: {}", item_id, e))
    }

    pub async fn remove_from_cart(&self, item_id: u64) -> Result<Cart> {
        self.request(&format!("/cart/items/{}/", item_id), RequestOptions::delete())
            .await
            .inspect_err(|e| tracing::error!("Error removing cart item {}: {}", item_id, e))
    }

    /// 清空目前 session 的購物車
    pub async fn clear_session_cart(&self) -> Result<MessageResponse> {
        self.request("/cart/", RequestOptions::delete()).await
    }

    pub async fn create_order_from_cart(&self, order: &OrderFromCart) -> Result<Order> {
        self.post("/cart/order/", order).await
    }

    /// 後台：所有 session 的購物車
    pub async fn get_all_carts(&self) -> Result<Vec<Cart>> {
        self.get_list("/admin/carts/").await
    }

    /// 後台：清空指定購物車
    pub async fn admin_clear_cart(&self, cart_id: u64) -> Result<()> {
        self.request_empty(&format!("/admin/carts/{}/", cart_id), RequestOptions::delete())
            .await
    }

    /// 後台：刪除所有購物車
    pub async fn admin_clear_all_carts(&self) -> Result<()> {
        self.request_empty("/admin/carts/", RequestOptions::delete())
            .await
    }
}
