//! 服务器状态
//!
//! `ServerState` 在所有 handler 之间共享（axum `State`）。
//! 域存储是单写者模型：所有写操作在 `FloorStore` 的锁内完成。

use std::sync::Arc;

use shared::models::TableCreate;

use crate::core::Config;
use crate::store::FloorStore;

/// Shared server state
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: Arc<FloorStore>,
}

/// Default floor plan seeded at startup: (section, table numbers, capacity)
const FLOOR_PLAN: &[(&str, &[&str], i32)] = &[
    ("Main Hall", &["1", "2", "3", "4", "5", "6"], 4),
    ("Terrace", &["T1", "T2", "T3", "T4"], 2),
    ("Private", &["P1", "P2"], 8),
];

impl ServerState {
    /// 初始化服务器状态
    pub fn initialize(config: &Config) -> Self {
        let store = FloorStore::new(config.charge_rates());

        if config.seed_floor_plan {
            Self::seed_floor_plan(&store);
        }

        Self {
            config: Arc::new(config.clone()),
            store: Arc::new(store),
        }
    }

    /// 生成默认桌台布局 (开发/演示环境)
    fn seed_floor_plan(store: &FloorStore) {
        for (section, numbers, capacity) in FLOOR_PLAN {
            for number in *numbers {
                store.create_table(TableCreate {
                    number: (*number).to_string(),
                    capacity: Some(*capacity),
                    section: Some((*section).to_string()),
                });
            }
        }
        tracing::info!(tables = store.list_tables().len(), "Floor plan seeded");
    }
}
