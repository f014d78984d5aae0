//! 产品资源：列表、搜索、评分排序、最新/最早查询与 CRUD

pub mod handler;
pub mod model;
pub mod service;

pub use handler::router;
pub use model::Product;
pub use service::ProductService;
