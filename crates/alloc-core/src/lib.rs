//! # Allocation Core
//!
//! 庫存分配核心資料模型與類型定義

pub mod config;
pub mod cost;
pub mod demand;
pub mod plan;
pub mod problem;
pub mod request;
pub mod stock;
pub mod strategy;

// Re-export 主要類型
pub use config::{
    AllocationConfig, QuantityPolicy, DEFAULT_SHORTAGE_PENALTY, MAX_COST_DECIMALS, MAX_QUANTITY,
    MAX_SHORTAGE_PENALTY,
};
pub use cost::CostTable;
pub use demand::{total_demand, DemandLine};
pub use plan::{AllocationLine, AllocationStatus};
pub use problem::{AllocationProblem, ProblemStore};
pub use request::AllocationRequest;
pub use stock::WarehouseStock;
pub use strategy::AllocationStrategy;

use rust_decimal::Decimal;

/// 分配錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum AllocError {
    #[error("輸入驗證失敗: {0}")]
    Validation(#[from] ValidationError),

    /// 求解器回報不可行/無界，或解違反模型恆等式。
    /// 模型本身恆可行（全部缺貨即為可行解），出現此錯誤代表建模缺陷，不應重試。
    #[error("求解器不變量被破壞: {0}")]
    SolverInvariant(String),

    #[error("請求格式錯誤: {0}")]
    InvalidRequest(String),
}

/// 輸入驗證錯誤（於任何計算開始前回報）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("需求清單為空")]
    EmptyDemand,

    #[error("門市 {store_id} 在需求清單中重複出現")]
    DuplicateStore { store_id: String },

    #[error("門市 {store_id} 有需求資料但缺少運費資料")]
    MissingCost { store_id: String },

    #[error("門市 {store_id} 的預測需求為負數: {value}")]
    NegativeDemand { store_id: String, value: Decimal },

    #[error("倉庫庫存為負數: {value}")]
    NegativeStock { value: Decimal },

    #[error("門市 {store_id} 的單位運費為負數: {value}")]
    NegativeCost { store_id: String, value: Decimal },

    #[error("{field} 必須為整數單位，收到 {value}")]
    FractionalQuantity { field: String, value: Decimal },

    #[error("門市 {store_id} 的單位運費 {cost} 不小於缺貨懲罰 {penalty}")]
    PenaltyNotDominant {
        store_id: String,
        cost: Decimal,
        penalty: Decimal,
    },

    #[error("缺貨懲罰必須為正數: {value}")]
    NonPositivePenalty { value: Decimal },

    #[error("缺貨懲罰 {value} 超過上限 {limit}")]
    PenaltyTooLarge { value: Decimal, limit: Decimal },

    #[error("{field} 為 {value}，超過上限 {limit}")]
    QuantityTooLarge {
        field: String,
        value: Decimal,
        limit: Decimal,
    },

    #[error("門市 {store_id} 的單位運費 {value} 超過 {max_decimals} 位小數")]
    CostPrecision {
        store_id: String,
        value: Decimal,
        max_decimals: u32,
    },

    #[error("{field} 計算溢位")]
    ArithmeticOverflow { field: String },
}

impl ValidationError {
    /// 出錯的門市（若錯誤與特定門市相關）
    pub fn store_id(&self) -> Option<&str> {
        match self {
            ValidationError::DuplicateStore { store_id }
            | ValidationError::MissingCost { store_id }
            | ValidationError::NegativeDemand { store_id, .. }
            | ValidationError::NegativeCost { store_id, .. }
            | ValidationError::PenaltyNotDominant { store_id, .. }
            | ValidationError::CostPrecision { store_id, .. } => Some(store_id),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AllocError>;
