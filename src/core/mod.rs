//! 核心层：错误、集合、查询、响应与中间件

pub mod collection;
pub mod error;
pub mod middleware;
pub mod query;
pub mod response;
