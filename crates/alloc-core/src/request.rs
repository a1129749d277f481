//! 分配請求

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{AllocError, CostTable, DemandLine, WarehouseStock};

/// 單一計劃期間的分配請求（需求、庫存、運費）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// 計劃期間（僅作標記）
    #[serde(default)]
    pub period: Option<NaiveDate>,

    /// 各門市預測需求
    pub demand: Vec<DemandLine>,

    /// 倉庫可用庫存
    pub stock: WarehouseStock,

    /// 門市單位運費
    pub costs: CostTable,
}

impl AllocationRequest {
    /// 創建新的分配請求
    pub fn new(demand: Vec<DemandLine>, stock: WarehouseStock, costs: CostTable) -> Self {
        Self {
            period: None,
            demand,
            stock,
            costs,
        }
    }

    /// 建構器模式：設置計劃期間
    pub fn with_period(mut self, period: NaiveDate) -> Self {
        self.period = Some(period);
        self
    }

    /// 從 JSON 解析請求
    pub fn from_json(input: &str) -> crate::Result<Self> {
        serde_json::from_str(input).map_err(|e| AllocError::InvalidRequest(e.to_string()))
    }
}
