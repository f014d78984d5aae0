//! 门店数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::collection::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub active_since: DateTime<Utc>,
}

impl Entity for Store {
    const KIND: &'static str = "Store";

    fn id(&self) -> Uuid {
        self.id
    }
}
