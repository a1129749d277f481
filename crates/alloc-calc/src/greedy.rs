//! 貪婪分配（封閉解）
//!
//! 單一來源、各門市每單位價值相同的運輸問題。缺貨懲罰大於所有運費時，
//! 依運費由低到高依序填滿需求即為整數規劃的最適解：
//! 有庫存就一定出貨，庫存不足時先犧牲運費最高的門市。

use alloc_core::{AllocationLine, AllocationProblem, AllocationStrategy};

use crate::ranking::CostRanking;

/// 貪婪分配策略
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyAllocator;

impl GreedyAllocator {
    /// 創建新的貪婪分配器
    pub fn new() -> Self {
        Self
    }
}

impl AllocationStrategy for GreedyAllocator {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, problem: &AllocationProblem) -> alloc_core::Result<Vec<AllocationLine>> {
        let stores = problem.stores();
        let order = CostRanking::rank(stores);
        tracing::debug!("運費排序: {:?}", order);

        let allocated = CostRanking::fill_in_order(stores, &order, problem.stock());

        let lines: Vec<AllocationLine> = stores
            .iter()
            .zip(allocated)
            .map(|(store, qty)| {
                tracing::debug!(
                    "門市 {} 運費 {}：需求 {}，分配 {}",
                    store.store_id,
                    store.unit_cost,
                    store.demand,
                    qty
                );
                AllocationLine::new(store.store_id.clone(), store.demand, qty)
            })
            .collect();

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc_core::{AllocationConfig, AllocationStatus, CostTable, DemandLine, WarehouseStock};
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn problem(demand: &[(&str, u32)], stock: u32, costs: &[(&str, u32)]) -> AllocationProblem {
        let demand: Vec<DemandLine> = demand
            .iter()
            .map(|(id, qty)| DemandLine::new(id.to_string(), Decimal::from(*qty)))
            .collect();
        let costs: CostTable = costs
            .iter()
            .map(|(id, cost)| (id.to_string(), Decimal::from(*cost)))
            .collect();

        AllocationProblem::validate(
            &demand,
            WarehouseStock::new(Decimal::from(stock)),
            &costs,
            &AllocationConfig::default(),
        )
        .unwrap()
    }

    fn quantities(lines: &[AllocationLine]) -> Vec<(String, Decimal, Decimal)> {
        lines
            .iter()
            .map(|l| (l.store_id.clone(), l.allocated_qty, l.shortage_qty))
            .collect()
    }

    #[rstest]
    #[case::exact_cover(150, vec![("A", dec!(100), dec!(0)), ("B", dec!(50), dec!(0))])]
    #[case::scarce(90, vec![("A", dec!(40), dec!(60)), ("B", dec!(50), dec!(0))])]
    #[case::only_cheapest(30, vec![("A", dec!(0), dec!(100)), ("B", dec!(30), dec!(20))])]
    #[case::no_stock(0, vec![("A", dec!(0), dec!(100)), ("B", dec!(0), dec!(50))])]
    #[case::surplus(1000, vec![("A", dec!(100), dec!(0)), ("B", dec!(50), dec!(0))])]
    fn test_two_store_scenarios(
        #[case] stock: u32,
        #[case] expected: Vec<(&str, Decimal, Decimal)>,
    ) {
        let problem = problem(&[("A", 100), ("B", 50)], stock, &[("A", 10), ("B", 5)]);
        let lines = GreedyAllocator::new().solve(&problem).unwrap();

        let expected: Vec<(String, Decimal, Decimal)> = expected
            .into_iter()
            .map(|(id, a, s)| (id.to_string(), a, s))
            .collect();
        assert_eq!(quantities(&lines), expected);
    }

    #[test]
    fn test_zero_demand_store() {
        let problem = problem(&[("A", 0), ("B", 20)], 10, &[("A", 1), ("B", 2)]);
        let lines = GreedyAllocator::new().solve(&problem).unwrap();

        assert_eq!(lines[0].allocated_qty, dec!(0));
        assert_eq!(lines[0].shortage_qty, dec!(0));
        assert_eq!(lines[0].status, AllocationStatus::Fulfilled);
        assert_eq!(lines[1].allocated_qty, dec!(10));
        assert_eq!(lines[1].shortage_qty, dec!(10));
        assert_eq!(lines[1].status, AllocationStatus::Stockout);
    }

    #[test]
    fn test_equal_costs_follow_input_order() {
        let problem = problem(
            &[("Store_C", 30), ("Store_A", 30), ("Store_B", 30)],
            45,
            &[("Store_A", 4), ("Store_B", 4), ("Store_C", 4)],
        );
        let lines = GreedyAllocator::new().solve(&problem).unwrap();

        // 同運費時依輸入順序：C 先滿足，A 拿剩餘，B 缺貨
        assert_eq!(lines[0].allocated_qty, dec!(30));
        assert_eq!(lines[1].allocated_qty, dec!(15));
        assert_eq!(lines[2].allocated_qty, dec!(0));
    }

    #[test]
    fn test_output_keeps_input_order() {
        let problem = problem(
            &[("Store_A", 10), ("Store_B", 10), ("Store_E", 10)],
            25,
            &[("Store_A", 15), ("Store_B", 10), ("Store_E", 5)],
        );
        let lines = GreedyAllocator::new().solve(&problem).unwrap();

        let ids: Vec<&str> = lines.iter().map(|l| l.store_id.as_str()).collect();
        assert_eq!(ids, vec!["Store_A", "Store_B", "Store_E"]);
        assert_eq!(lines[0].allocated_qty, dec!(5));
    }

    proptest! {
        #[test]
        fn prop_cheaper_store_shorted_only_if_pricier_fully_shorted(
            stores in prop::collection::vec((0u32..200, 0u32..50), 1..8),
            stock in 0u32..1000,
        ) {
            let ids: Vec<String> = (0..stores.len()).map(|i| format!("S{}", i)).collect();
            let demand: Vec<(&str, u32)> = ids
                .iter()
                .zip(&stores)
                .map(|(id, (d, _))| (id.as_str(), *d))
                .collect();
            let costs: Vec<(&str, u32)> = ids
                .iter()
                .zip(&stores)
                .map(|(id, (_, c))| (id.as_str(), *c))
                .collect();

            let problem = problem(&demand, stock, &costs);
            let lines = GreedyAllocator::new().solve(&problem).unwrap();
            problem.check_solution(&lines).unwrap();

            for (a, line_a) in lines.iter().enumerate() {
                for (b, line_b) in lines.iter().enumerate() {
                    let cheaper = stores[a].1 < stores[b].1;
                    if cheaper && line_a.shortage_qty > Decimal::ZERO {
                        prop_assert_eq!(line_b.allocated_qty, Decimal::ZERO);
                    }
                }
            }
        }
    }
}
