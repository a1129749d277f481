//! # Allocation Calculation Engine
//!
//! 單期庫存分配計算引擎

pub mod allocator;
pub mod greedy;
pub mod ranking;
pub mod summary;

// Re-export 主要類型
pub use allocator::Allocator;
pub use greedy::GreedyAllocator;
pub use ranking::CostRanking;
pub use summary::AllocationSummary;

use alloc_core::AllocationLine;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// 分配計算結果
#[derive(Debug, Clone, Serialize)]
pub struct AllocationResult {
    /// 計劃期間
    pub period: Option<NaiveDate>,

    /// 使用的分配策略
    pub strategy: String,

    /// 各門市分配（原始需求順序）
    pub lines: Vec<AllocationLine>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl AllocationResult {
    /// 創建新的計算結果
    pub fn new(strategy: &str, lines: Vec<AllocationLine>) -> Self {
        Self {
            period: None,
            strategy: strategy.to_string(),
            lines,
            calculation_time_ms: None,
        }
    }

    /// 總分配量
    pub fn total_allocated(&self) -> Decimal {
        self.lines.iter().map(|l| l.allocated_qty).sum()
    }

    /// 總缺貨量
    pub fn total_shortage(&self) -> Decimal {
        self.lines.iter().map(|l| l.shortage_qty).sum()
    }

    /// 缺貨門市
    pub fn stockout_lines(&self) -> Vec<&AllocationLine> {
        self.lines.iter().filter(|l| l.is_stockout()).collect()
    }
}
