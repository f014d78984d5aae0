//! 产品业务服务

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::model::Product;
use crate::core::{
    collection::Collection,
    error::CoreError,
    query::{Keyword, SortOrder},
};

const INVALID_PRODUCT: &str = "Product data is invalid.";

#[derive(Clone, Default)]
pub struct ProductService {
    products: Collection<Product>,
}

impl ProductService {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Collection::new(products),
        }
    }

    /// 启动时的两条示例数据
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self::new(vec![
            Product {
                id: Uuid::new_v4(),
                name: "Product 1".to_string(),
                description: "Description of Product 1".to_string(),
                ratings: vec![4, 5, 3],
                created_on: now - Duration::days(5),
            },
            Product {
                id: Uuid::new_v4(),
                name: "Product 2".to_string(),
                description: "Description of Product 2".to_string(),
                ratings: vec![5, 5, 5],
                created_on: now - Duration::days(3),
            },
        ])
    }

    pub fn invalid() -> CoreError {
        CoreError::BadRequest(INVALID_PRODUCT.to_string())
    }

    pub fn count(&self) -> Result<usize, CoreError> {
        self.products.len()
    }

    pub fn list(&self) -> Result<Vec<Product>, CoreError> {
        self.products.all()
    }

    /// 名称或描述包含关键字 (不区分大小写)
    pub fn search(&self, keyword: &str) -> Result<Vec<Product>, CoreError> {
        let needle = Keyword::new(keyword);
        let found = self
            .products
            .filter(|p| needle.found_in(&p.name) || needle.found_in(&p.description))?;
        debug!("search '{}' matched {} products", keyword, found.len());
        Ok(found)
    }

    pub fn sorted_by_rating(&self, order: SortOrder) -> Result<Vec<Product>, CoreError> {
        let mut products = self.products.all()?;
        products.sort_by(|a, b| order.apply(a.average_rating().total_cmp(&b.average_rating())));
        Ok(products)
    }

    pub fn most_recent(&self) -> Result<Product, CoreError> {
        self.products
            .first_by(|candidate, current| candidate.created_on > current.created_on)?
            .ok_or_else(|| CoreError::NotFound("No products found.".to_string()))
    }

    pub fn oldest(&self) -> Result<Product, CoreError> {
        self.products
            .first_by(|candidate, current| candidate.created_on < current.created_on)?
            .ok_or_else(|| CoreError::NotFound("No products found.".to_string()))
    }

    pub fn get(&self, id: Uuid) -> Result<Product, CoreError> {
        self.products.get(id).inspect_err(|_| {
            warn!("product {} not found", id);
        })
    }

    /// 创建产品，`createdOn` 总是使用服务端当前时间
    pub fn create(&self, payload: Option<Product>) -> Result<Product, CoreError> {
        let mut product = payload.ok_or_else(Self::invalid)?;
        product.created_on = Utc::now();

        match self.products.insert(product) {
            Ok(product) => {
                info!("created product {} ({})", product.id, product.name);
                Ok(product)
            }
            Err(err) => {
                warn!("rejected product create: {}", err);
                Err(err)
            }
        }
    }

    /// 覆盖 name、description、ratings；id 与 createdOn 保持不变
    pub fn edit(&self, id: Uuid, payload: Option<Product>) -> Result<(), CoreError> {
        let update = payload
            .filter(|p| p.id == id)
            .ok_or_else(Self::invalid)?;

        self.products.modify(id, |existing| {
            existing.name = update.name;
            existing.description = update.description;
            existing.ratings = update.ratings;
        })?;
        info!("updated product {}", id);
        Ok(())
    }

    pub fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        self.products.remove(id)?;
        info!("deleted product {}", id);
        Ok(())
    }
}
