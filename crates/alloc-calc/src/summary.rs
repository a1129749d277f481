//! 分配結果彙總
//!
//! 供結果使用端顯示的指標：出貨總量、缺貨總量、滿足率與成本拆分。

use alloc_core::{AllocationLine, CostTable, ValidationError};
use rust_decimal::Decimal;
use serde::Serialize;

/// 分配結果彙總
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationSummary {
    /// 總需求
    pub total_demand: Decimal,

    /// 總分配
    pub total_allocated: Decimal,

    /// 總缺貨
    pub total_shortage: Decimal,

    /// 滿足率（%），總需求為 0 時無定義
    pub fulfillment_rate: Option<Decimal>,

    /// 運費成本
    pub shipping_cost: Decimal,

    /// 缺貨懲罰成本
    pub penalty_cost: Decimal,

    /// 目標函數值（運費 + 懲罰）
    pub objective: Decimal,

    /// 缺貨門市（結果順序）
    pub stockout_stores: Vec<String>,
}

impl AllocationSummary {
    /// 彙總分配結果
    pub fn from_lines(
        lines: &[AllocationLine],
        costs: &CostTable,
        penalty: Decimal,
    ) -> alloc_core::Result<Self> {
        let mut total_demand = Decimal::ZERO;
        let mut total_allocated = Decimal::ZERO;
        let mut total_shortage = Decimal::ZERO;
        let mut shipping_cost = Decimal::ZERO;
        let mut stockout_stores = Vec::new();

        for line in lines {
            let unit_cost = costs
                .get(&line.store_id)
                .ok_or_else(|| ValidationError::MissingCost {
                    store_id: line.store_id.clone(),
                })?;

            total_demand =
                checked(total_demand.checked_add(line.predicted_demand), "total_demand")?;
            total_allocated =
                checked(total_allocated.checked_add(line.allocated_qty), "total_allocated")?;
            total_shortage =
                checked(total_shortage.checked_add(line.shortage_qty), "total_shortage")?;
            shipping_cost = checked(
                unit_cost
                    .checked_mul(line.allocated_qty)
                    .and_then(|cost| shipping_cost.checked_add(cost)),
                "shipping_cost",
            )?;

            if line.is_stockout() {
                stockout_stores.push(line.store_id.clone());
            }
        }

        // 分配總量不超過需求總量，比率不會溢位
        let fulfillment_rate = if total_demand.is_zero() {
            None
        } else {
            Some(total_allocated / total_demand * Decimal::ONE_HUNDRED)
        };

        let penalty_cost = checked(penalty.checked_mul(total_shortage), "penalty_cost")?;
        let objective = checked(shipping_cost.checked_add(penalty_cost), "objective")?;

        Ok(Self {
            total_demand,
            total_allocated,
            total_shortage,
            fulfillment_rate,
            shipping_cost,
            penalty_cost,
            objective,
            stockout_stores,
        })
    }

    /// 檢查是否有門市缺貨
    pub fn has_stockout(&self) -> bool {
        !self.stockout_stores.is_empty()
    }
}

fn checked(value: Option<Decimal>, field: &str) -> alloc_core::Result<Decimal> {
    value.ok_or_else(|| {
        ValidationError::ArithmeticOverflow {
            field: field.to_string(),
        }
        .into()
    })
}
