//! 应用层

pub mod products;
pub mod stores;
