//! 需求模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AllocError, ValidationError};

/// 單一門市在計劃期間的預測需求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandLine {
    /// 門市ID
    pub store_id: String,

    /// 預測需求數量
    pub predicted_demand: Decimal,
}

impl DemandLine {
    /// 創建新的需求
    pub fn new(store_id: String, predicted_demand: Decimal) -> Self {
        Self {
            store_id,
            predicted_demand,
        }
    }

    /// 檢查是否無需求
    pub fn is_zero(&self) -> bool {
        self.predicted_demand.is_zero()
    }
}

/// 計算需求總量
///
/// 總和超出 `Decimal` 範圍時回傳 [`ValidationError::ArithmeticOverflow`]。
pub fn total_demand(lines: &[DemandLine]) -> crate::Result<Decimal> {
    lines.iter().try_fold(Decimal::ZERO, |total, line| {
        total.checked_add(line.predicted_demand).ok_or_else(|| {
            AllocError::from(ValidationError::ArithmeticOverflow {
                field: "total_demand".to_string(),
            })
        })
    })
}
