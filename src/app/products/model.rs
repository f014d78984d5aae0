//! 产品数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::collection::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ratings: Vec<i32>,
    /// 创建时由服务端覆盖
    #[serde(default = "Utc::now")]
    pub created_on: DateTime<Utc>,
}

impl Product {
    /// 评分算术平均值；没有评分时为 0
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let sum: i64 = self.ratings.iter().map(|&r| i64::from(r)).sum();
        sum as f64 / self.ratings.len() as f64
    }
}

impl Entity for Product {
    const KIND: &'static str = "Product";

    fn id(&self) -> Uuid {
        self.id
    }
}
