//! # Stock Allocation
//!
//! 單期倉庫庫存分配：在總庫存有限時，以最低「運費 + 缺貨懲罰」將庫存分配給各門市。
//!
//! ```
//! use rust_decimal::Decimal;
//! use stock_alloc::{allocate, CostTable, DemandLine, WarehouseStock};
//!
//! let demand = vec![
//!     DemandLine::new("A".to_string(), Decimal::from(100)),
//!     DemandLine::new("B".to_string(), Decimal::from(50)),
//! ];
//! let costs = CostTable::new()
//!     .with_cost("A".to_string(), Decimal::from(10))
//!     .with_cost("B".to_string(), Decimal::from(5));
//!
//! let lines = allocate(&demand, WarehouseStock::new(Decimal::from(90)), &costs).unwrap();
//! assert_eq!(lines[0].allocated_qty, Decimal::from(40)); // A
//! assert_eq!(lines[1].allocated_qty, Decimal::from(50)); // B
//! ```

pub use alloc_calc::{AllocationResult, AllocationSummary, Allocator, CostRanking, GreedyAllocator};
pub use alloc_core::{
    total_demand, AllocError, AllocationConfig, AllocationLine, AllocationProblem,
    AllocationRequest, AllocationStatus, AllocationStrategy, CostTable, DemandLine, ProblemStore,
    QuantityPolicy, Result, ValidationError, WarehouseStock, DEFAULT_SHORTAGE_PENALTY,
    MAX_COST_DECIMALS, MAX_QUANTITY, MAX_SHORTAGE_PENALTY,
};
pub use alloc_optimizer::{compare_strategies, lp_allocator, EquivalenceReport, LpAllocator};

/// 以預設配置（懲罰 1000、小數捨去）與貪婪策略分配庫存
pub fn allocate(
    demand: &[DemandLine],
    stock: WarehouseStock,
    costs: &CostTable,
) -> Result<Vec<AllocationLine>> {
    Allocator::greedy().allocate(demand, stock, costs)
}

/// 解析 JSON 請求、執行分配並輸出 JSON 結果
pub fn allocate_json(input: &str) -> Result<String> {
    let request = AllocationRequest::from_json(input)?;
    let result = Allocator::greedy().run(&request)?;
    serde_json::to_string_pretty(&result).map_err(|e| AllocError::InvalidRequest(e.to_string()))
}
