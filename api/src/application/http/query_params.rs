use larder_core::domain::common::OffsetLimit;
use serde::Deserialize;
use utoipa::IntoParams;

/// `offset` / `limit` query parameters. Defaults to the first 20 rows; the
/// limit is capped at 100.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PaginationQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationQuery {
    pub fn offset_limit(&self) -> OffsetLimit {
        let default = OffsetLimit::default();
        OffsetLimit::new(
            self.offset.unwrap_or(default.offset),
            self.limit.unwrap_or(default.limit),
        )
    }
}

/// Splits `a, b,,c` into `["a", "b", "c"]`.
pub fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
