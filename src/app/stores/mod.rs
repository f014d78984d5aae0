//! 门店资源：搜索、国家/城市过滤、收入排序、转让与 CRUD

pub mod handler;
pub mod model;
pub mod service;

pub use handler::router;
pub use model::Store;
pub use service::StoreService;
