//! 分配結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 分配狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationStatus {
    /// 需求完全滿足
    Fulfilled,
    /// 部分或全部缺貨
    Stockout,
}

/// 單一門市的分配結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationLine {
    /// 門市ID
    pub store_id: String,

    /// 預測需求（整數單位）
    pub predicted_demand: Decimal,

    /// 分配數量
    pub allocated_qty: Decimal,

    /// 缺貨數量（需求 - 分配）
    pub shortage_qty: Decimal,

    /// 分配狀態
    pub status: AllocationStatus,
}

impl AllocationLine {
    /// 由需求與分配數量創建結果，缺貨量與狀態由此推得
    pub fn new(store_id: String, predicted_demand: Decimal, allocated_qty: Decimal) -> Self {
        let shortage_qty = predicted_demand - allocated_qty;
        let status = if shortage_qty.is_zero() {
            AllocationStatus::Fulfilled
        } else {
            AllocationStatus::Stockout
        };

        Self {
            store_id,
            predicted_demand,
            allocated_qty,
            shortage_qty,
            status,
        }
    }

    /// 檢查是否缺貨
    pub fn is_stockout(&self) -> bool {
        self.status == AllocationStatus::Stockout
    }
}
