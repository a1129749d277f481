//! 整數線性規劃分配（透過 good_lp 的 microlp 後端）
//!
//! 直接以一般求解器表達模型：
//!
//! ```text
//! min  Σ 運費[s] × 出貨[s] + 懲罰 × Σ 缺貨[s]
//! s.t. Σ 出貨[s] ≤ 庫存
//!      出貨[s] + 缺貨[s] = 需求[s]
//!      出貨[s], 缺貨[s] ∈ ℤ≥0
//! ```
//!
//! 相同運費的門市之間存在多個最適解；求解後依輸入順序重新分配同運費組的總量，
//! 使結果與貪婪解完全一致。
//!
//! 數值範圍由 [`AllocationProblem::validate`] 限制（需求總量、懲罰上限、運費小數位數），
//! 因此所有係數與右手邊都落在 f64 可精確表示的整數範圍內。

use alloc_calc::CostRanking;
use alloc_core::{AllocError, AllocationLine, AllocationProblem, AllocationStrategy};
use good_lp::solvers::microlp::microlp;
use good_lp::{constraint, variable, variables, Expression, Solution, SolverModel, Variable};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// 求解器數值與整數的容許誤差（絕對下限）
const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// 求解器數值與整數的容許誤差（相對於數值大小）
const RELATIVE_INTEGRALITY_TOLERANCE: f64 = 1e-10;

/// 線性規劃分配策略
#[derive(Debug, Default, Clone, Copy)]
pub struct LpAllocator;

impl LpAllocator {
    /// 創建新的線性規劃分配器
    pub fn new() -> Self {
        Self
    }
}

impl AllocationStrategy for LpAllocator {
    fn name(&self) -> &'static str {
        "lp"
    }

    fn solve(&self, problem: &AllocationProblem) -> alloc_core::Result<Vec<AllocationLine>> {
        let stores = problem.stores();
        let penalty = to_f64(problem.shortage_penalty())?;

        let mut vars = variables!();
        let ship: Vec<Variable> = stores
            .iter()
            .map(|_| vars.add(variable().integer().min(0)))
            .collect();
        let shortage: Vec<Variable> = stores
            .iter()
            .map(|_| vars.add(variable().integer().min(0)))
            .collect();

        let unit_costs = stores
            .iter()
            .map(|store| to_f64(store.unit_cost))
            .collect::<alloc_core::Result<Vec<f64>>>()?;
        let objective: Expression = unit_costs
            .iter()
            .zip(ship.iter().zip(&shortage))
            .map(|(&cost, (&x, &y))| cost * x + penalty * y)
            .sum();

        let mut model = vars.minimise(objective).using(microlp);

        // 倉庫容量；超過需求總量的庫存不影響最適解
        let total_shipped: Expression = ship.iter().map(|&x| Expression::from(x)).sum();
        let stock = to_f64(problem.stock().min(problem.total_demand()))?;
        model = model.with(constraint!(total_shipped <= stock));

        // 需求平衡
        for ((store, &x), &y) in stores.iter().zip(&ship).zip(&shortage) {
            let demand = to_f64(store.demand)?;
            model = model.with(constraint!(x + y == demand));
        }

        tracing::debug!("求解整數規劃：變數 {} 個，約束 {} 條", stores.len() * 2, stores.len() + 1);

        let solution = model
            .solve()
            .map_err(|e| AllocError::SolverInvariant(format!("求解失敗: {}", e)))?;

        let mut raw_ship = Vec::with_capacity(stores.len());
        for (store, (&x, &y)) in stores.iter().zip(ship.iter().zip(&shortage)) {
            let shipped = to_units(solution.value(x))?;
            let short = to_units(solution.value(y))?;
            if shipped + short != store.demand {
                return Err(AllocError::SolverInvariant(format!(
                    "門市 {} 求解結果不平衡：出貨 {} + 缺貨 {} != 需求 {}",
                    store.store_id, shipped, short, store.demand
                )));
            }
            raw_ship.push(shipped);
        }

        // 同運費組的總量在所有最適解中唯一，組內依輸入順序重新分配
        let mut allocated = vec![Decimal::ZERO; stores.len()];
        for tier in CostRanking::tiers(stores) {
            let tier_total: Decimal = tier.iter().map(|&idx| raw_ship[idx]).sum();
            let filled = CostRanking::fill_in_order(stores, &tier, tier_total);
            for &idx in &tier {
                allocated[idx] = filled[idx];
            }
        }

        Ok(stores
            .iter()
            .zip(allocated)
            .map(|(store, qty)| AllocationLine::new(store.store_id.clone(), store.demand, qty))
            .collect())
    }
}

fn to_f64(value: Decimal) -> alloc_core::Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| AllocError::SolverInvariant(format!("數值 {} 無法轉為浮點數", value)))
}

/// 將求解器輸出轉為整數單位
fn to_units(value: f64) -> alloc_core::Result<Decimal> {
    let rounded = value.round();
    let tolerance = (value.abs() * RELATIVE_INTEGRALITY_TOLERANCE).max(INTEGRALITY_TOLERANCE);
    if (value - rounded).abs() > tolerance {
        return Err(AllocError::SolverInvariant(format!(
            "求解結果非整數: {}",
            value
        )));
    }

    // -0.0 與微小負值一律視為 0
    let rounded = if rounded <= 0.0 { 0.0 } else { rounded };
    Decimal::from_f64(rounded)
        .map(|d| d.trunc())
        .ok_or_else(|| AllocError::SolverInvariant(format!("求解結果無法轉換: {}", value)))
}
