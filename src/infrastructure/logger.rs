//! 日志基础设施

use tracing_subscriber::{fmt, EnvFilter};

pub struct Logger;

impl Logger {
    /// 安装全局 fmt 订阅器，所有 target 使用同一基础级别；
    /// 设置了 `RUST_LOG` 时以其为准
    pub fn init(level: &str) {
        fmt().with_env_filter(Self::filter(level)).with_target(true).init();
    }

    fn filter(level: &str) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }
}
