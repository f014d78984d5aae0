//! 查询参数与匹配工具

use std::cmp::Ordering;

use serde::Deserialize;

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// `"desc"` (不区分大小写) 为降序，其余任何值都按升序处理
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("desc") => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// `?sortOrder=asc|desc`
#[derive(Debug, Default, Deserialize)]
pub struct SortQuery {
    #[serde(rename = "sortOrder", default)]
    pub sort_order: Option<String>,
}

impl SortQuery {
    pub fn order(&self) -> SortOrder {
        SortOrder::parse(self.sort_order.as_deref())
    }
}

/// 不区分大小写的匹配关键字，构造时只做一次小写化
#[derive(Debug, Clone)]
pub struct Keyword(String);

impl Keyword {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// 子串匹配
    pub fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    /// 整串相等
    pub fn equals(&self, value: &str) -> bool {
        value.to_lowercase() == self.0
    }
}
