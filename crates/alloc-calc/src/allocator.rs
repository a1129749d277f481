//! 分配主計算器

use alloc_core::{
    AllocationConfig, AllocationLine, AllocationProblem, AllocationRequest, AllocationStrategy,
    CostTable, DemandLine, WarehouseStock,
};
use rayon::prelude::*;

use crate::{AllocationResult, GreedyAllocator};

/// 分配計算器
///
/// 負責驗證輸入、呼叫分配策略並檢查結果。不持有任何跨呼叫狀態，可在多執行緒下共用。
#[derive(Debug, Clone)]
pub struct Allocator<S = GreedyAllocator> {
    /// 分配策略
    strategy: S,

    /// 分配配置
    config: AllocationConfig,
}

impl Allocator<GreedyAllocator> {
    /// 使用預設配置的貪婪分配器
    pub fn greedy() -> Self {
        Self::new(GreedyAllocator::new(), AllocationConfig::default())
    }
}

impl Default for Allocator<GreedyAllocator> {
    fn default() -> Self {
        Self::greedy()
    }
}

impl<S: AllocationStrategy> Allocator<S> {
    /// 創建新的分配計算器
    pub fn new(strategy: S, config: AllocationConfig) -> Self {
        Self { strategy, config }
    }

    /// 建構器模式：設置分配配置
    pub fn with_config(mut self, config: AllocationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// 分配主入口：需求、庫存、運費 → 各門市分配與缺貨
    pub fn allocate(
        &self,
        demand: &[DemandLine],
        stock: WarehouseStock,
        costs: &CostTable,
    ) -> alloc_core::Result<Vec<AllocationLine>> {
        let problem = AllocationProblem::validate(demand, stock, costs, &self.config)?;
        self.solve(&problem)
    }

    /// 執行單一期間的分配請求
    pub fn run(&self, request: &AllocationRequest) -> alloc_core::Result<AllocationResult> {
        tracing::info!(
            "開始分配計算：期間 {:?}，門市 {} 家，庫存 {}，策略 {}",
            request.period,
            request.demand.len(),
            request.stock.quantity(),
            self.strategy.name()
        );

        let start_time = std::time::Instant::now();

        let problem = AllocationProblem::validate(
            &request.demand,
            request.stock,
            &request.costs,
            &self.config,
        )?;
        let lines = self.solve(&problem)?;

        let mut result = AllocationResult::new(self.strategy.name(), lines);
        result.period = request.period;
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "分配計算完成，耗時 {:?}，分配 {}，缺貨 {}",
            start_time.elapsed(),
            result.total_allocated(),
            result.total_shortage()
        );

        Ok(result)
    }

    /// 平行執行多個期間的分配請求，結果順序與輸入一致
    pub fn run_periods(
        &self,
        requests: &[AllocationRequest],
    ) -> Vec<alloc_core::Result<AllocationResult>> {
        tracing::debug!("批次分配：{} 個期間", requests.len());
        requests.par_iter().map(|request| self.run(request)).collect()
    }

    /// 對已驗證的問題求解並檢查約束
    pub fn solve(&self, problem: &AllocationProblem) -> alloc_core::Result<Vec<AllocationLine>> {
        if problem.is_scarce() {
            tracing::warn!(
                "庫存不足：需求 {}，庫存 {}，將優先供應運費較低的門市",
                problem.total_demand(),
                problem.stock()
            );
        }

        let lines = self.strategy.solve(problem)?;
        problem.check_solution(&lines)?;

        Ok(lines)
    }
}
