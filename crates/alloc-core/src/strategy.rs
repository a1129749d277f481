//! 分配策略介面

use crate::{AllocationLine, AllocationProblem};

/// 分配策略
///
/// 輸入為已驗證的問題，輸出依原始需求順序、每門市一筆的分配結果。
/// 實作不得持有跨呼叫的可變狀態。
pub trait AllocationStrategy: Send + Sync {
    /// 策略名稱（用於日誌與結果標記）
    fn name(&self) -> &'static str;

    /// 求解分配
    fn solve(&self, problem: &AllocationProblem) -> crate::Result<Vec<AllocationLine>>;
}
