//! 五家門市庫存分配示例
//!
//! 倉庫只有需求總量 80% 的庫存，依運費決定優先供應順序。

use chrono::NaiveDate;
use rust_decimal::Decimal;
use stock_alloc::{
    total_demand, AllocationRequest, AllocationSummary, Allocator, CostTable, DemandLine,
    WarehouseStock, DEFAULT_SHORTAGE_PENALTY,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== 門市庫存分配示例 ===\n");

    let period =
        NaiveDate::from_ymd_opt(2024, 12, 31).ok_or_else(|| anyhow::anyhow!("無效日期"))?;

    // 預測需求
    let demand = vec![
        DemandLine::new("Store_A".to_string(), Decimal::from(176)),
        DemandLine::new("Store_B".to_string(), Decimal::from(98)),
        DemandLine::new("Store_C".to_string(), Decimal::from(143)),
        DemandLine::new("Store_D".to_string(), Decimal::from(61)),
        DemandLine::new("Store_E".to_string(), Decimal::from(129)),
    ];
    let total_demand = total_demand(&demand)?;

    // 庫存為需求的 80%（缺貨情境）
    let stock = WarehouseStock::from_demand_ratio(total_demand, Decimal::from(80))?;

    // 運費：A 最遠，E 最近
    let costs = CostTable::new()
        .with_cost("Store_A".to_string(), Decimal::from(15))
        .with_cost("Store_B".to_string(), Decimal::from(10))
        .with_cost("Store_C".to_string(), Decimal::from(12))
        .with_cost("Store_D".to_string(), Decimal::from(8))
        .with_cost("Store_E".to_string(), Decimal::from(5));

    println!("計劃日期: {}", period);
    println!("  需求總量: {} 單位", total_demand);
    println!("  倉庫庫存: {} 單位\n", stock.quantity());

    let request = AllocationRequest::new(demand, stock, costs.clone()).with_period(period);
    let result = Allocator::greedy().run(&request)?;

    println!("分配計劃:");
    for line in &result.lines {
        println!(
            "  - {}: 需求 {:>4}, 分配 {:>4}, 缺貨 {:>4}, 狀態 {:?}",
            line.store_id, line.predicted_demand, line.allocated_qty, line.shortage_qty, line.status
        );
    }

    let summary = AllocationSummary::from_lines(&result.lines, &costs, DEFAULT_SHORTAGE_PENALTY)?;
    println!("\n總出貨: {} 單位", summary.total_allocated);
    println!("缺貨: {} 單位", summary.total_shortage);
    if let Some(rate) = summary.fulfillment_rate {
        println!("滿足率: {:.1}%", rate);
    }
    println!("運費: {}，缺貨懲罰: {}", summary.shipping_cost, summary.penalty_cost);

    if summary.has_stockout() {
        println!("\n警告：{:?} 缺貨，已優先供應運費較低的門市", summary.stockout_stores);
    } else {
        println!("\n所有需求皆已滿足");
    }

    Ok(())
}
