use crate::config::cli::Command;
use crate::core::body::FilePart;
use crate::core::client::ApiClient;
use crate::domain::model::{AddToCart, CartItemUpdate, CategoryFields, OrderFromCart, Review};
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::Value;

fn to_value<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// 相對的圖片路徑換成 media host 底下的完整 URL；沒有圖片則維持 `None`
fn resolve_image(client: &ApiClient, image: &mut Option<String>) {
    if let Some(path) = image.take() {
        *image = Some(client.media_url(Some(&path)));
    }
}

/// 執行一個 CLI 子命令，回傳要印到 stdout 的 JSON
pub async fn run(client: &ApiClient, command: Command) -> Result<Value> {
    tracing::debug!("Running command: {:?}", command);

    match command {
        Command::Categories => {
            let mut categories = client.get_categories().await?;
            for category in &mut categories {
                resolve_image(client, &mut category.image);
            }
            to_value(categories)
        }

        Command::Menu { category, search } => {
            let mut items = match (search, category) {
                (Some(query), category) => client.search_menu_items(&query, category).await?,
                (None, Some(id)) => client.get_menu_items_by_category(id).await?,
                (None, None) => client.get_menu_items().await?,
            };
            for item in &mut items {
                resolve_image(client, &mut item.image);
            }
            tracing::info!("📋 {} menu items", items.len());
            to_value(items)
        }

        Command::MenuItem { id } => {
            let mut item = client.get_menu_item(id).await?;
            resolve_image(client, &mut item.image);
            to_value(item)
        }

        Command::Promotions => {
            let mut promotions = client.get_promotions().await?;
            for promotion in &mut promotions {
                resolve_image(client, &mut promotion.image);
            }
            to_value(promotions)
        }

        Command::Reviews { all } => {
            if all {
                to_value(client.get_all_reviews().await?)
            } else {
                let reviews: Vec<Review> = client
                    .get_reviews()
                    .await?
                    .into_iter()
                    .filter(Review::is_public)
                    .collect();
                to_value(reviews)
            }
        }

        Command::Orders => to_value(client.get_orders().await?),

        Command::Order { id } => to_value(client.get_order(id).await?),

        Command::OrderStatus { id, status } => {
            let order = client.update_order_status(id, status).await?;
            tracing::info!("✅ Order {} is now {}", id, status);
            to_value(order)
        }

        Command::Stats => to_value(client.get_stats().await?),

        Command::Settings => to_value(client.get_site_settings().await?),

        Command::Text { content_type } => match content_type {
            Some(t) => to_value(client.get_text_content_by_type(&t).await?),
            None => to_value(client.get_text_content().await?),
        },

        Command::Info => to_value(client.get_restaurant_info().await?),

        Command::Cart => to_value(client.get_cart().await?),

        Command::CartAdd { item, quantity, notes } => {
            let cart = client
                .add_to_cart(&AddToCart {
                    menu_item_id: item,
                    quantity,
                    notes,
                })
                .await?;
            tracing::info!("🛒 Added item {} x{}", item, quantity);
            to_value(cart)
        }

        Command::CartUpdate { item, quantity, notes } => {
            to_value(client.update_cart_item(item, &CartItemUpdate { quantity, notes }).await?)
        }

        Command::CartRemove { item } => to_value(client.remove_from_cart(item).await?),

        Command::CartClear => to_value(client.clear_session_cart().await?),

        Command::Checkout { table, name, notes } => {
            let order = client
                .create_order_from_cart(&OrderFromCart {
                    table_number: table,
                    customer_name: name,
                    notes,
                })
                .await?;
            tracing::info!("✅ Order {} created for table {}", order.id, table);
            to_value(order)
        }

        Command::CreateCategory {
            name,
            uz,
            ru,
            icon,
            image,
        } => {
            let image = match image {
                Some(path) => Some(FilePart::from_path("image", path).await?),
                None => None,
            };
            let fields = CategoryFields {
                name: Some(name),
                name_uz: Some(uz),
                name_ru: Some(ru),
                icon,
                ..CategoryFields::default()
            };
            to_value(client.create_category(&fields, image).await?)
        }
    }
}
