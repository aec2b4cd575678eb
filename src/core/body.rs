//! 請求 body 的編碼：JSON 或 multipart。
//!
//! multipart 表單保留為自有的資料結構，每次嘗試都重新轉成 `reqwest::multipart::Form`，
//! 所以重試時 body 可以重送。

use crate::utils::error::{ApiError, Result};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(RequestBody::Json(serde_json::to_value(value)?))
    }

    /// multipart 交給 transport 決定 content type（含 boundary）
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            RequestBody::Json(_) => Some("application/json"),
            RequestBody::Empty | RequestBody::Multipart(_) => None,
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

/// 上傳的檔案欄位
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field_name: String,
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(field_name: &str, file_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            field_name: field_name.to_string(),
            file_name: file_name.to_string(),
            mime: mime_for(file_name).map(str::to_string),
            bytes,
        }
    }

    /// 從磁碟讀取圖片，依副檔名推測 MIME
    pub async fn from_path(field_name: &str, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        Ok(Self::new(field_name, &file_name, bytes))
    }
}

fn mime_for(file_name: &str) -> Option<&'static str> {
    let ext = Path::new(file_name).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "ico" => Some("image/x-icon"),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    pub text: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 把 struct 的欄位攤平成文字欄位。
    ///
    /// `null` 不送；空的 `image` 不送（避免清掉伺服器上的圖片）；
    /// 陣列與物件以 JSON 字串送出；其他值用文字表示。
    pub fn from_fields<T: Serialize + ?Sized>(fields: &T) -> Result<Self> {
        let value = serde_json::to_value(fields)?;
        let object = match value {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(ApiError::Config {
                    message: format!("form fields must serialize to an object, got {}", other),
                })
            }
        };

        let mut form = Self::new();
        for (key, value) in object {
            match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(s) if key == "image" && s.is_empty() => continue,
                serde_json::Value::Bool(false) if key == "image" => continue,
                serde_json::Value::String(s) => form.text.push((key, s)),
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                    form.text.push((key, value.to_string()))
                }
                other => form.text.push((key, other.to_string())),
            }
        }
        Ok(form)
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.text.push((name.to_string(), value.into()));
        self
    }

    pub fn file(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.text
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_reqwest(&self) -> Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in &self.text {
            form = form.text(name.clone(), value.clone());
        }
        for file in &self.files {
            let mut part =
                reqwest::multipart::Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
            if let Some(mime) = &file.mime {
                part = part.mime_str(mime)?;
            }
            form = form.part(file.field_name.clone(), part);
        }
        Ok(form)
    }
}
