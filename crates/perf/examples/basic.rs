use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use nebula_perf::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let sink = Arc::new(TracingSink::new());
    let mut counter = nebula_perf::start(sink, Config::new("checkout"))?;

    let cart = counter.record_step("load_cart", || vec!["book", "lamp"]);

    let total = counter
        .record_step_async("price_cart", async {
            tokio::time::sleep(Duration::from_millis(25)).await;
            cart.len() * 10
        })
        .await;

    let _ = counter.try_record_step("apply_coupon", || {
        Err::<(), _>(anyhow::anyhow!("coupon expired"))
    });

    counter.stop_and_report();
    println!("cart total: {total}");

    Ok(())
}
