//! 運費排序

use alloc_core::ProblemStore;
use rust_decimal::Decimal;

/// 運費排序計算器
pub struct CostRanking;

impl CostRanking {
    /// 依單位運費由低到高排列門市索引
    ///
    /// 相同運費維持原始輸入順序（穩定排序），確保結果可重現。
    pub fn rank(stores: &[ProblemStore]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..stores.len()).collect();
        order.sort_by(|&a, &b| stores[a].unit_cost.cmp(&stores[b].unit_cost));
        order
    }

    /// 將相同運費的門市分組，組間依運費由低到高，組內依輸入順序
    pub fn tiers(stores: &[ProblemStore]) -> Vec<Vec<usize>> {
        let mut tiers: Vec<Vec<usize>> = Vec::new();
        let mut current_cost: Option<Decimal> = None;

        for idx in Self::rank(stores) {
            let cost = stores[idx].unit_cost;
            if current_cost == Some(cost) {
                if let Some(tier) = tiers.last_mut() {
                    tier.push(idx);
                    continue;
                }
            }
            tiers.push(vec![idx]);
            current_cost = Some(cost);
        }

        tiers
    }

    /// 依指定順序逐一填滿門市需求，直到額度用完
    ///
    /// 回傳與 `stores` 對齊的分配量，未出現在 `order` 中的門市為 0。
    pub fn fill_in_order(
        stores: &[ProblemStore],
        order: &[usize],
        budget: Decimal,
    ) -> Vec<Decimal> {
        let mut allocated = vec![Decimal::ZERO; stores.len()];
        let mut remaining = budget;

        for &idx in order {
            if remaining <= Decimal::ZERO {
                break;
            }
            let qty = remaining.min(stores[idx].demand);
            allocated[idx] = qty;
            remaining -= qty;
        }

        allocated
    }
}
