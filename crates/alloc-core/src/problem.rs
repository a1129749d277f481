//! 已驗證的分配問題

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

use crate::{
    AllocError, AllocationConfig, AllocationLine, CostTable, DemandLine, ValidationError,
    WarehouseStock, MAX_COST_DECIMALS, MAX_QUANTITY, MAX_SHORTAGE_PENALTY,
};

/// 參與分配的門市（需求已轉為整數單位，運費已對應）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemStore {
    /// 門市ID
    pub store_id: String,
    /// 需求（整數單位）
    pub demand: Decimal,
    /// 單位運費
    pub unit_cost: Decimal,
}

/// 分配問題
///
/// 只能透過 [`AllocationProblem::validate`] 建立，因此所有策略拿到的輸入都滿足前置條件：
/// 門市非空且唯一、每個門市都有運費、數量非負且為整數、缺貨懲罰大於所有運費，
/// 需求總量不超過 [`MAX_QUANTITY`]、懲罰不超過 [`MAX_SHORTAGE_PENALTY`]。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationProblem {
    stores: Vec<ProblemStore>,
    stock: Decimal,
    shortage_penalty: Decimal,
    total_demand: Decimal,
}

impl AllocationProblem {
    /// 驗證輸入並建立分配問題
    ///
    /// 任一前置條件不成立即回傳 [`ValidationError`]，不做任何分配計算。
    pub fn validate(
        demand: &[DemandLine],
        stock: WarehouseStock,
        costs: &CostTable,
        config: &AllocationConfig,
    ) -> crate::Result<Self> {
        if demand.is_empty() {
            return Err(ValidationError::EmptyDemand.into());
        }

        let penalty = config.shortage_penalty;
        if penalty <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePenalty { value: penalty }.into());
        }
        if penalty > MAX_SHORTAGE_PENALTY {
            return Err(ValidationError::PenaltyTooLarge {
                value: penalty,
                limit: MAX_SHORTAGE_PENALTY,
            }
            .into());
        }

        let stock_qty = stock.quantity();
        if stock_qty < Decimal::ZERO {
            return Err(ValidationError::NegativeStock { value: stock_qty }.into());
        }
        let stock_qty = config.quantity_policy.normalize(stock_qty).ok_or_else(|| {
            ValidationError::FractionalQuantity {
                field: "stock".to_string(),
                value: stock_qty,
            }
        })?;

        let mut seen: HashSet<&str> = HashSet::with_capacity(demand.len());
        let mut stores = Vec::with_capacity(demand.len());
        let mut total_demand = Decimal::ZERO;

        for line in demand {
            if !seen.insert(line.store_id.as_str()) {
                return Err(ValidationError::DuplicateStore {
                    store_id: line.store_id.clone(),
                }
                .into());
            }

            if line.predicted_demand < Decimal::ZERO {
                return Err(ValidationError::NegativeDemand {
                    store_id: line.store_id.clone(),
                    value: line.predicted_demand,
                }
                .into());
            }

            let demand_qty = config
                .quantity_policy
                .normalize(line.predicted_demand)
                .ok_or_else(|| ValidationError::FractionalQuantity {
                    field: format!("predicted_demand[{}]", line.store_id),
                    value: line.predicted_demand,
                })?;

            if demand_qty > MAX_QUANTITY {
                return Err(ValidationError::QuantityTooLarge {
                    field: format!("predicted_demand[{}]", line.store_id),
                    value: demand_qty,
                    limit: MAX_QUANTITY,
                }
                .into());
            }

            total_demand = total_demand
                .checked_add(demand_qty)
                .filter(|total| *total <= MAX_QUANTITY)
                .ok_or_else(|| ValidationError::QuantityTooLarge {
                    field: "total_demand".to_string(),
                    value: total_demand.saturating_add(demand_qty),
                    limit: MAX_QUANTITY,
                })?;

            let unit_cost =
                costs
                    .get(&line.store_id)
                    .ok_or_else(|| ValidationError::MissingCost {
                        store_id: line.store_id.clone(),
                    })?;

            if unit_cost < Decimal::ZERO {
                return Err(ValidationError::NegativeCost {
                    store_id: line.store_id.clone(),
                    value: unit_cost,
                }
                .into());
            }

            if unit_cost.normalize().scale() > MAX_COST_DECIMALS {
                return Err(ValidationError::CostPrecision {
                    store_id: line.store_id.clone(),
                    value: unit_cost,
                    max_decimals: MAX_COST_DECIMALS,
                }
                .into());
            }

            if unit_cost >= penalty {
                return Err(ValidationError::PenaltyNotDominant {
                    store_id: line.store_id.clone(),
                    cost: unit_cost,
                    penalty,
                }
                .into());
            }

            stores.push(ProblemStore {
                store_id: line.store_id.clone(),
                demand: demand_qty,
                unit_cost,
            });
        }

        Ok(Self {
            stores,
            stock: stock_qty,
            shortage_penalty: penalty,
            total_demand,
        })
    }

    /// 門市（原始輸入順序）
    pub fn stores(&self) -> &[ProblemStore] {
        &self.stores
    }

    /// 可用庫存（整數單位）
    pub fn stock(&self) -> Decimal {
        self.stock
    }

    pub fn shortage_penalty(&self) -> Decimal {
        self.shortage_penalty
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// 需求總量（驗證時已累計）
    pub fn total_demand(&self) -> Decimal {
        self.total_demand
    }

    /// 檢查是否庫存不足
    pub fn is_scarce(&self) -> bool {
        self.stock < self.total_demand()
    }

    /// 計算目標函數值：Σ 運費 × 分配量 + 懲罰 × Σ 缺貨量
    ///
    /// `lines` 必須與 [`stores`](Self::stores) 順序一致。
    pub fn objective_value(&self, lines: &[AllocationLine]) -> crate::Result<Decimal> {
        let overflow = || {
            AllocError::from(ValidationError::ArithmeticOverflow {
                field: "objective".to_string(),
            })
        };

        self.stores
            .iter()
            .zip(lines)
            .try_fold(Decimal::ZERO, |total, (store, line)| {
                let shipping = store.unit_cost.checked_mul(line.allocated_qty);
                let penalty = self.shortage_penalty.checked_mul(line.shortage_qty);
                shipping
                    .zip(penalty)
                    .and_then(|(shipping, penalty)| shipping.checked_add(penalty))
                    .and_then(|cost| total.checked_add(cost))
                    .ok_or_else(overflow)
            })
    }

    /// 檢查分配結果是否滿足模型約束
    ///
    /// 逐門市檢查順序、平衡與非負，並檢查總分配不超過庫存。
    /// 違反時回傳 [`AllocError::SolverInvariant`]。
    pub fn check_solution(&self, lines: &[AllocationLine]) -> crate::Result<()> {
        if lines.len() != self.stores.len() {
            return Err(AllocError::SolverInvariant(format!(
                "結果筆數 {} 與門市數 {} 不一致",
                lines.len(),
                self.stores.len()
            )));
        }

        let mut total_allocated = Decimal::ZERO;
        for (store, line) in self.stores.iter().zip(lines) {
            if store.store_id != line.store_id {
                return Err(AllocError::SolverInvariant(format!(
                    "結果順序錯誤：預期 {}，收到 {}",
                    store.store_id, line.store_id
                )));
            }
            if line.allocated_qty < Decimal::ZERO || line.shortage_qty < Decimal::ZERO {
                return Err(AllocError::SolverInvariant(format!(
                    "門市 {} 出現負數：分配 {}，缺貨 {}",
                    store.store_id, line.allocated_qty, line.shortage_qty
                )));
            }
            if line.allocated_qty.checked_add(line.shortage_qty) != Some(store.demand)
                || line.predicted_demand != store.demand
            {
                return Err(AllocError::SolverInvariant(format!(
                    "門市 {} 平衡約束不成立：分配 {} + 缺貨 {} != 需求 {}",
                    store.store_id, line.allocated_qty, line.shortage_qty, store.demand
                )));
            }
            total_allocated = total_allocated
                .checked_add(line.allocated_qty)
                .ok_or_else(|| AllocError::SolverInvariant("總分配量溢位".to_string()))?;
        }

        if total_allocated > self.stock {
            return Err(AllocError::SolverInvariant(format!(
                "總分配 {} 超過庫存 {}",
                total_allocated, self.stock
            )));
        }

        Ok(())
    }
}
