//! 庫存水位情境模擬
//!
//! 庫存從需求的 50% 調到 150%，比較貪婪解與求解器解。

use rust_decimal::Decimal;
use stock_alloc::{
    compare_strategies, total_demand, AllocationConfig, AllocationProblem, CostTable, DemandLine,
    WarehouseStock,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== 庫存水位情境模擬 ===\n");

    let demand = vec![
        DemandLine::new("Store_A".to_string(), Decimal::from(150)),
        DemandLine::new("Store_B".to_string(), Decimal::from(120)),
        DemandLine::new("Store_C".to_string(), Decimal::from(90)),
        DemandLine::new("Store_D".to_string(), Decimal::from(120)),
        DemandLine::new("Store_E".to_string(), Decimal::from(60)),
    ];
    let costs = CostTable::new()
        .with_cost("Store_A".to_string(), Decimal::from(15))
        .with_cost("Store_B".to_string(), Decimal::from(10))
        .with_cost("Store_C".to_string(), Decimal::from(12))
        .with_cost("Store_D".to_string(), Decimal::from(10))
        .with_cost("Store_E".to_string(), Decimal::from(5));
    let total_demand = total_demand(&demand)?;
    let config = AllocationConfig::default();

    for percent in (50..=150).step_by(25) {
        let stock = WarehouseStock::from_demand_ratio(total_demand, Decimal::from(percent))?;
        let problem = AllocationProblem::validate(&demand, stock, &costs, &config)?;
        let report = compare_strategies(&problem)?;

        let allocated: Vec<String> = report
            .greedy
            .iter()
            .map(|l| format!("{}={}", l.store_id, l.allocated_qty))
            .collect();

        println!(
            "庫存 {:>3}% ({:>4}): {} | 目標值 {} | 求解器一致: {}",
            percent,
            stock.quantity(),
            allocated.join(", "),
            report.greedy_objective,
            if report.is_equivalent() { "是" } else { "否" }
        );
    }

    Ok(())
}
