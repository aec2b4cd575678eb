//! 評論、意見回饋與評論審核紀錄

use crate::core::client::{ApiClient, RequestOptions};
use crate::domain::model::{Feedback, NewFeedback, NewReview, Review, ReviewAction, ReviewUpdate};
use crate::utils::error::Result;

impl ApiClient {
    pub async fn get_reviews(&self) -> Result<Vec<Review>> {
        self.get_list("/reviews/").await
    }

    /// 後台用，包含未核准與已刪除
    pub async fn get_all_reviews(&self) -> Result<Vec<Review>> {
        self.get_list("/admin/reviews/").await
    }

    pub async fn create_review(&self, review: &NewReview) -> Result<Review> {
        self.post("/reviews/", review).await
    }

    pub async fn update_review(&self, id: u64, update: &ReviewUpdate) -> Result<Review> {
        self.patch(&format!("/reviews/{}/", id), update).await
    }

    pub async fn delete_review(&self, id: u64) -> Result<()> {
        self.request_empty(&format!("/reviews/{}/", id), RequestOptions::delete())
            .await
    }

    pub async fn get_review_actions(&self) -> Result<Vec<ReviewAction>> {
        self.get_list("/admin/review-actions/").await
    }

    pub async fn delete_review_action(&self, id: u64) -> Result<()> {
        self.request_empty(&format!("/admin/review-actions/{}/", id), RequestOptions::delete())
            .await
    }

    pub async fn get_all_feedback(&self) -> Result<Vec<Feedback>> {
        tracing::debug!("Fetching feedback from {}/feedback/", self.base_url());
        self.get_list("/feedback/").await
    }

    pub async fn create_feedback(&self, feedback: &NewFeedback) -> Result<Feedback> {
        self.post("/feedback/", feedback).await
    }

    pub async fn delete_feedback(&self, id: u64) -> Result<()> {
        self.request_empty(&format!("/feedback/{}/", id), RequestOptions::delete())
            .await
    }
}
