//! 分類、菜單品項、促銷活動

use crate::core::body::{FilePart, MultipartForm};
use crate::core::client::{ApiClient, RequestOptions};
use crate::domain::model::{
    Category, CategoryFields, MenuItem, MenuItemFields, Promotion, PromotionFields,
};
use crate::utils::error::Result;
use serde::Serialize;

/// 欄位加上可選的圖片，組成 multipart 表單
fn form_with_image<T: Serialize>(fields: &T, image: Option<FilePart>) -> Result<MultipartForm> {
    let form = MultipartForm::from_fields(fields)?;
    Ok(match image {
        Some(mut part) => {
            part.field_name = "image".to_string();
            form.file(part)
        }
        None => form,
    })
}

impl ApiClient {
    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        self.get_list("/categories/").await
    }

    pub async fn get_category(&self, id: u64) -> Result<Category> {
        self.get(&format!("/categories/{}/", id)).await
    }

    pub async fn create_category(&self, fields: &CategoryFields, image: Option<FilePart>) -> Result<Category> {
        self.post_form("/categories/", form_with_image(fields, image)?).await
    }

    pub async fn update_category(
        &self,
        id: u64,
        fields: &CategoryFields,
        image: Option<FilePart>,
    ) -> Result<Category> {
        self.patch_form(&format!("/categories/{}/", id), form_with_image(fields, image)?)
            .await
    }

    pub async fn delete_category(&self, id: u64) -> Result<()> {
        self.request_empty(&format!("/categories/{}/", id), RequestOptions::delete())
            .await
    }

    /// 含下架品項，不分頁
    pub async fn get_menu_items(&self) -> Result<Vec<MenuItem>> {
        self.get_list("/menu-items/?show_all=true").await
    }

    pub async fn get_menu_item(&self, id: u64) -> Result<MenuItem> {
        self.get(&format!("/menu-items/{}/", id)).await
    }

    pub async fn create_menu_item(&self, fields: &MenuItemFields, image: Option<FilePart>) -> Result<MenuItem> {
        self.post_form("/menu-items/", form_with_image(fields, image)?).await
    }

    pub async fn update_menu_item(
        &self,
        id: u64,
        fields: &MenuItemFields,
        image: Option<FilePart>,
    ) -> Result<MenuItem> {
        self.patch_form(&format!("/menu-items/{}/", id), form_with_image(fields, image)?)
            .await
    }

    pub async fn delete_menu_item(&self, id: u64) -> Result<()> {
        self.request_empty(&format!("/menu-items/{}/", id), RequestOptions::delete())
            .await
    }

    pub async fn get_menu_items_by_category(&self, category_id: u64) -> Result<Vec<MenuItem>> {
        self.get_list(&format!("/categories/{}/menu-items/", category_id))
            .await
    }

    pub async fn search_menu_items(&self, query: &str, category_id: Option<u64>) -> Result<Vec<MenuItem>> {
        let mut params = url::form_urlencoded::Serializer::new(String::new());
        params.append_pair("q", query);
        if let Some(id) = category_id {
            params.append_pair("category", &id.to_string());
        }
        self.get_list(&format!("/search/?{}", params.finish())).await
    }

    pub async fn get_promotions(&self) -> Result<Vec<Promotion>> {
        self.get_list("/promotions/").await
    }

    pub async fn get_promotion(&self, id: u64) -> Result<Promotion> {
        self.get(&format!("/promotions/{}/", id)).await
    }

    pub async fn create_promotion(&self, fields: &PromotionFields, image: Option<FilePart>) -> Result<Promotion> {
        self.post_form("/promotions/", form_with_image(fields, image)?).await
    }

    pub async fn update_promotion(
        &self,
        id: u64,
        fields: &PromotionFields,
        image: Option<FilePart>,
    ) -> Result<Promotion> {
        self.patch_form(&format!("/promotions/{}/", id), form_with_image(fields, image)?)
            .await
    }

    pub async fn delete_promotion(&self, id: u64) -> Result<()> {
        self.request_empty(&format!("/promotions/{}/", id), RequestOptions::delete())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_is_always_sent_as_image_field() {
        let fields = CategoryFields {
            name: Some("Rolls".into()),
            ..Default::default()
        };
        let form = form_with_image(&fields, Some(FilePart::new("file", "rolls.jpg", vec![1, 2, 3]))).unwrap();
        assert_eq!(form.files[0].field_name, "image");
        assert_eq!(form.field("name"), Some("Rolls"));

        let without = form_with_image(&fields, None).unwrap();
        assert!(without.files.is_empty());
    }
}
