//! 分配配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 預設缺貨懲罰（每單位未滿足需求的成本）
///
/// 遠高於實際單位運費，使「滿足需求」永遠優先於「節省運費」。
pub const DEFAULT_SHORTAGE_PENALTY: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// 單一門市需求與需求總量的上限（整數單位）
///
/// 求解器以 f64 建模，超過此範圍時無法保證求得整數最適解。
pub const MAX_QUANTITY: Decimal = Decimal::from_parts(2_000_000_000, 0, 0, false, 0);

/// 缺貨懲罰上限（運費必須小於懲罰，因此同時限制運費）
pub const MAX_SHORTAGE_PENALTY: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// 單位運費允許的小數位數
pub const MAX_COST_DECIMALS: u32 = 4;

/// 分配參數配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// 缺貨懲罰（每單位）
    ///
    /// 必須嚴格大於所有參與分配門市的單位運費，否則貪婪解與求解器解可能不一致。
    pub shortage_penalty: Decimal,

    /// 非整數數量的處理方式
    pub quantity_policy: QuantityPolicy,
}

impl AllocationConfig {
    /// 創建新的分配配置
    pub fn new() -> Self {
        Self {
            shortage_penalty: DEFAULT_SHORTAGE_PENALTY,
            quantity_policy: QuantityPolicy::Truncate,
        }
    }

    /// 建構器模式：設置缺貨懲罰
    pub fn with_shortage_penalty(mut self, penalty: Decimal) -> Self {
        self.shortage_penalty = penalty;
        self
    }

    /// 建構器模式：設置數量處理方式
    ///
    /// # 範例
    /// ```
    /// # use alloc_core::{AllocationConfig, QuantityPolicy};
    /// let config = AllocationConfig::new()
    ///     .with_quantity_policy(QuantityPolicy::Reject); // 不接受小數數量
    /// ```
    pub fn with_quantity_policy(mut self, policy: QuantityPolicy) -> Self {
        self.quantity_policy = policy;
        self
    }
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 數量處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityPolicy {
    /// 無條件捨去至整數單位（預設）
    Truncate,
    /// 拒絕非整數數量
    Reject,
}

impl QuantityPolicy {
    /// 將數量轉為整數單位，`Reject` 模式下遇到小數回傳 `None`
    pub fn normalize(&self, quantity: Decimal) -> Option<Decimal> {
        if quantity.fract().is_zero() {
            return Some(quantity.trunc());
        }

        match self {
            QuantityPolicy::Truncate => Some(quantity.trunc()),
            QuantityPolicy::Reject => None,
        }
    }
}
