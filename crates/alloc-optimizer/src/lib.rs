//! # Allocation Optimizer
//!
//! 一般求解器形式的分配模型，以及與貪婪封閉解的等價性檢查

pub mod lp;

// Re-export 主要類型
pub use lp::LpAllocator;

use alloc_calc::{Allocator, GreedyAllocator};
use alloc_core::{AllocationConfig, AllocationLine, AllocationProblem, AllocationStrategy};
use rust_decimal::Decimal;
use serde::Serialize;

/// 使用線性規劃策略的分配計算器
pub fn lp_allocator(config: AllocationConfig) -> Allocator<LpAllocator> {
    Allocator::new(LpAllocator::new(), config)
}

/// 貪婪解與求解器解的比較結果
#[derive(Debug, Clone, Serialize)]
pub struct EquivalenceReport {
    /// 貪婪解
    pub greedy: Vec<AllocationLine>,

    /// 求解器解
    pub solver: Vec<AllocationLine>,

    /// 貪婪解目標函數值
    pub greedy_objective: Decimal,

    /// 求解器解目標函數值
    pub solver_objective: Decimal,

    /// 分配量不一致的門市
    pub mismatched_stores: Vec<String>,
}

impl EquivalenceReport {
    /// 兩種策略的分配與缺貨是否完全一致
    pub fn is_equivalent(&self) -> bool {
        self.mismatched_stores.is_empty()
    }
}

/// 對同一問題分別執行貪婪與求解器策略並比較
pub fn compare_strategies(problem: &AllocationProblem) -> alloc_core::Result<EquivalenceReport> {
    let greedy = GreedyAllocator::new().solve(problem)?;
    problem.check_solution(&greedy)?;

    let solver = LpAllocator::new().solve(problem)?;
    problem.check_solution(&solver)?;

    let mismatched_stores: Vec<String> = greedy
        .iter()
        .zip(&solver)
        .filter(|(g, s)| g.allocated_qty != s.allocated_qty || g.shortage_qty != s.shortage_qty)
        .map(|(g, _)| g.store_id.clone())
        .collect();

    if !mismatched_stores.is_empty() {
        tracing::warn!("貪婪解與求解器解不一致: {:?}", mismatched_stores);
    }

    Ok(EquivalenceReport {
        greedy_objective: problem.objective_value(&greedy)?,
        solver_objective: problem.objective_value(&solver)?,
        greedy,
        solver,
        mismatched_stores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc_core::{CostTable, DemandLine, WarehouseStock};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn five_store_problem(stock: Decimal) -> AllocationProblem {
        let demand = vec![
            DemandLine::new("Store_A".to_string(), dec!(120)),
            DemandLine::new("Store_B".to_string(), dec!(95)),
            DemandLine::new("Store_C".to_string(), dec!(160)),
            DemandLine::new("Store_D".to_string(), dec!(70)),
            DemandLine::new("Store_E".to_string(), dec!(140)),
        ];
        let costs = CostTable::new()
            .with_cost("Store_A".to_string(), dec!(15))
            .with_cost("Store_B".to_string(), dec!(10))
            .with_cost("Store_C".to_string(), dec!(12))
            .with_cost("Store_D".to_string(), dec!(8))
            .with_cost("Store_E".to_string(), dec!(5));

        AllocationProblem::validate(
            &demand,
            WarehouseStock::new(stock),
            &costs,
            &AllocationConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_five_store_equivalence() {
        // 需求 585，庫存 80% = 468
        let report = compare_strategies(&five_store_problem(dec!(468))).unwrap();

        assert!(report.is_equivalent());
        assert_eq!(report.greedy_objective, report.solver_objective);

        // E(5) 140, D(8) 70, B(10) 95, C(12) 160 → 共 465，A 只拿到 3
        assert_eq!(report.greedy[0].allocated_qty, dec!(3));
        assert_eq!(report.greedy[2].allocated_qty, dec!(160));
    }

    #[test]
    fn test_lp_allocator_driver() {
        let allocator = lp_allocator(AllocationConfig::default());
        let lines = allocator
            .allocate(
                &[
                    DemandLine::new("A".to_string(), dec!(0)),
                    DemandLine::new("B".to_string(), dec!(20)),
                ],
                WarehouseStock::new(dec!(10)),
                &CostTable::new()
                    .with_cost("A".to_string(), dec!(1))
                    .with_cost("B".to_string(), dec!(2)),
            )
            .unwrap();

        assert_eq!(lines[0].allocated_qty, dec!(0));
        assert_eq!(lines[0].shortage_qty, dec!(0));
        assert_eq!(lines[1].allocated_qty, dec!(10));
        assert_eq!(lines[1].shortage_qty, dec!(10));
    }

    #[test]
    fn test_fractional_cost_equivalence() {
        let problem = AllocationProblem::validate(
            &[
                DemandLine::new("Store_A".to_string(), dec!(80)),
                DemandLine::new("Store_B".to_string(), dec!(80)),
                DemandLine::new("Store_C".to_string(), dec!(80)),
                DemandLine::new("Store_D".to_string(), dec!(80)),
            ],
            WarehouseStock::new(dec!(190)),
            &CostTable::new()
                .with_cost("Store_A".to_string(), dec!(1.5))
                .with_cost("Store_B".to_string(), dec!(1.49))
                .with_cost("Store_C".to_string(), dec!(2.25))
                .with_cost("Store_D".to_string(), dec!(2.2)),
            &AllocationConfig::default(),
        )
        .unwrap();

        let report = compare_strategies(&problem).unwrap();
        assert!(report.is_equivalent());

        // B(1.49) 80, A(1.5) 80, D(2.2) 30, C(2.25) 0
        let allocated: Vec<Decimal> = report.solver.iter().map(|l| l.allocated_qty).collect();
        assert_eq!(allocated, vec![dec!(80), dec!(80), dec!(0), dec!(30)]);
        assert_eq!(report.solver_objective, dec!(130305.2));
    }

    #[test]
    fn test_large_quantity_equivalence() {
        let problem = AllocationProblem::validate(
            &[
                DemandLine::new("Store_A".to_string(), dec!(1000000000)),
                DemandLine::new("Store_B".to_string(), dec!(700000000)),
            ],
            WarehouseStock::new(dec!(1234567891)),
            &CostTable::new()
                .with_cost("Store_A".to_string(), dec!(7))
                .with_cost("Store_B".to_string(), dec!(3)),
            &AllocationConfig::default(),
        )
        .unwrap();

        let report = compare_strategies(&problem).unwrap();
        assert!(report.is_equivalent());
        assert_eq!(report.greedy_objective, report.solver_objective);
        assert_eq!(report.solver[0].shortage_qty, dec!(465432109));
    }

    fn problem_from(stores: &[(u64, u32)], stock: u64) -> AllocationProblem {
        let demand: Vec<DemandLine> = stores
            .iter()
            .enumerate()
            .map(|(i, (d, _))| DemandLine::new(format!("S{}", i), Decimal::from(*d)))
            .collect();
        // 運費以分為單位產生，含兩位小數
        let costs: CostTable = stores
            .iter()
            .enumerate()
            .map(|(i, (_, c))| (format!("S{}", i), Decimal::new(i64::from(*c), 2)))
            .collect();

        AllocationProblem::validate(
            &demand,
            WarehouseStock::new(Decimal::from(stock)),
            &costs,
            &AllocationConfig::default(),
        )
        .unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_greedy_matches_solver(
            stores in prop::collection::vec((0u64..120, 0u32..600), 1..7),
            stock in 0u64..600,
        ) {
            let problem = problem_from(&stores, stock);

            let report = compare_strategies(&problem).unwrap();
            prop_assert!(report.is_equivalent(), "不一致門市: {:?}", report.mismatched_stores);
            prop_assert_eq!(report.greedy, report.solver);
        }

        #[test]
        fn prop_greedy_matches_solver_large_quantities(
            stores in prop::collection::vec((0u64..300_000_000, 0u32..4000), 1..7),
            stock in 0u64..2_000_000_000,
        ) {
            let problem = problem_from(&stores, stock);

            let report = compare_strategies(&problem).unwrap();
            prop_assert!(report.is_equivalent(), "不一致門市: {:?}", report.mismatched_stores);
            prop_assert_eq!(report.greedy_objective, report.solver_objective);
        }
    }
}
