//! 運費表模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 門市單位運費表
///
/// 缺少門市時不提供預設值，由驗證步驟回報錯誤。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostTable {
    costs: BTreeMap<String, Decimal>,
}

impl CostTable {
    /// 創建空的運費表
    pub fn new() -> Self {
        Self {
            costs: BTreeMap::new(),
        }
    }

    /// 建構器模式：加入門市運費
    pub fn with_cost(mut self, store_id: String, unit_cost: Decimal) -> Self {
        self.insert(store_id, unit_cost);
        self
    }

    /// 設置門市運費（覆蓋既有值）
    pub fn insert(&mut self, store_id: String, unit_cost: Decimal) -> Option<Decimal> {
        self.costs.insert(store_id, unit_cost)
    }

    /// 查詢門市運費
    pub fn get(&self, store_id: &str) -> Option<Decimal> {
        self.costs.get(store_id).copied()
    }

    pub fn contains(&self, store_id: &str) -> bool {
        self.costs.contains_key(store_id)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// 依門市ID排序的運費
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.costs.iter().map(|(id, cost)| (id.as_str(), *cost))
    }
}

impl FromIterator<(String, Decimal)> for CostTable {
    fn from_iter<I: IntoIterator<Item = (String, Decimal)>>(iter: I) -> Self {
        Self {
            costs: iter.into_iter().collect(),
        }
    }
}
