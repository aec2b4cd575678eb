//! 價格、重量與圖片 URL 的顯示用格式化

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const DEFAULT_MEDIA_HOST: &str = "https://api.tokyokafe.uz";

/// `12000.0` -> `12 000 so'm`
pub fn format_price(price: f64) -> String {
    format!("{} so'm", group_thousands(price.round() as i64))
}

/// `250.4` -> `250г`
pub fn format_weight(weight: f64) -> String {
    format!("{}г", weight.round() as i64)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// 把後端回傳的相對媒體路徑轉為完整 URL
pub fn image_url(media_host: &str, path: Option<&str>) -> String {
    let path = match path.map(str::trim) {
        Some(p) if !p.is_empty() => p,
        _ => return PLACEHOLDER_IMAGE.to_string(),
    };

    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let host = media_host.trim_end_matches('/');
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    // logo 由靜態檔提供，不在 media 底下
    if path == "/logo.png" {
        return format!("{}/static/logo.png", host);
    }

    format!("{}{}", host, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(12000.0), "12 000 so'm");
        assert_eq!(format_price(999.6), "1 000 so'm");
        assert_eq!(format_price(45.0), "45 so'm");
        assert_eq!(format_price(1234567.0), "1 234 567 so'm");
    }

    #[test]
    fn test_format_weight_rounds() {
        assert_eq!(format_weight(250.4), "250г");
        assert_eq!(format_weight(99.5), "100г");
    }

    #[test]
    fn test_image_url_resolution() {
        assert_eq!(image_url(DEFAULT_MEDIA_HOST, None), PLACEHOLDER_IMAGE);
        assert_eq!(image_url(DEFAULT_MEDIA_HOST, Some("")), PLACEHOLDER_IMAGE);
        assert_eq!(
            image_url(DEFAULT_MEDIA_HOST, Some("https://cdn.example.com/a.jpg")),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(
            image_url(DEFAULT_MEDIA_HOST, Some("media/menu_items/ramen.jpg")),
            "https://api.tokyokafe.uz/media/menu_items/ramen.jpg"
        );
        assert_eq!(
            image_url("https://api.tokyokafe.uz/", Some("/logo.png")),
            "https://api.tokyokafe.uz/static/logo.png"
        );
    }
}
