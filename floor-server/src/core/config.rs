use rust_decimal::Decimal;
use shared::models::ChargeRates;

/// 服务器配置 - 楼面服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | TAX_RATE_PERCENT | 8.5 | 税率 (%) |
/// | SERVICE_CHARGE_PERCENT | 10 | 服务费率 (%) |
/// | SEED_FLOOR_PLAN | true | 启动时生成默认桌台 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 TAX_RATE_PERCENT=21 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 税率 (%)，作用于折后金额
    pub tax_rate_percent: Decimal,
    /// 服务费率 (%)，作用于折后金额
    pub service_charge_percent: Decimal,
    /// 启动时是否生成默认桌台布局
    pub seed_floor_plan: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            tax_rate_percent: std::env::var("TAX_RATE_PERCENT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| Decimal::new(85, 1)),
            service_charge_percent: std::env::var("SERVICE_CHARGE_PERCENT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| Decimal::new(10, 0)),
            seed_floor_plan: std::env::var("SEED_FLOOR_PLAN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// 税率/服务费率，供金额计算使用
    pub fn charge_rates(&self) -> ChargeRates {
        ChargeRates {
            tax_rate_percent: self.tax_rate_percent,
            service_charge_percent: self.service_charge_percent,
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
