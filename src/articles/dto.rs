use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}
fn default_limit() -> i64 {
    10
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit.max(1)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_to_first_page_of_ten() {
        let p: Pagination = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 10);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        let p = Pagination { page: 3, limit: 10 };
        assert_eq!(p.offset(), 20);
    }
}
