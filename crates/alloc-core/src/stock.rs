//! 倉庫庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// 中央倉庫在計劃期間的可用庫存（不分門市）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseStock {
    quantity: Decimal,
}

impl WarehouseStock {
    /// 創建新的庫存記錄
    pub fn new(quantity: Decimal) -> Self {
        Self { quantity }
    }

    /// 以需求總量的百分比推算庫存，捨去至整數單位
    ///
    /// 供呼叫端模擬庫存水位使用，分配器本身不推算庫存。
    pub fn from_demand_ratio(total_demand: Decimal, percent: Decimal) -> crate::Result<Self> {
        let quantity = total_demand
            .checked_mul(percent)
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(|| ValidationError::ArithmeticOverflow {
                field: "stock".to_string(),
            })?;

        Ok(Self {
            quantity: quantity.trunc(),
        })
    }

    /// 可用數量
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// 檢查庫存是否不足以滿足指定需求
    pub fn is_scarce_for(&self, total_demand: Decimal) -> bool {
        self.quantity < total_demand
    }
}

impl From<Decimal> for WarehouseStock {
    fn from(quantity: Decimal) -> Self {
        Self::new(quantity)
    }
}
