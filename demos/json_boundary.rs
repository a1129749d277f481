//! JSON 請求/回應示例

use stock_alloc::allocate_json;

const REQUEST: &str = r#"{
    "period": "2024-06-15",
    "demand": [
        { "store_id": "Store_A", "predicted_demand": "100" },
        { "store_id": "Store_B", "predicted_demand": "50" },
        { "store_id": "Store_C", "predicted_demand": "0" }
    ],
    "stock": "90",
    "costs": { "Store_A": "10", "Store_B": "5", "Store_C": "1" }
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("請求:\n{}\n", REQUEST);
    println!("回應:\n{}", allocate_json(REQUEST)?);

    Ok(())
}
