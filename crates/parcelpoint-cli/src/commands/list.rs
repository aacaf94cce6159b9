//! Listing commands: list-orders and list-returns

use clap::Args;

use parcelpoint_engine::engine_query;
use parcelpoint_store::OrderFile;

/// Arguments for listing stored orders
#[derive(Debug, Args)]
pub struct ListOrdersArgs {
    /// Customer to list, 0 for all customers
    #[arg(long, default_value_t = 0)]
    pub customer_id: u64,

    /// Show only the last N matching orders
    #[arg(long)]
    pub last_n: Option<usize>,

    /// Path of the order store file
    #[arg(long, default_value = "orders.json")]
    pub store: String,
}

/// Arguments for listing customer returns
#[derive(Debug, Args)]
pub struct ListReturnsArgs {
    /// Customer to list, 0 for all customers
    #[arg(long, default_value_t = 0)]
    pub customer_id: u64,

    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Records per page
    #[arg(long, default_value_t = 10)]
    pub page_size: usize,

    /// Path of the order store file
    #[arg(long, default_value = "orders.json")]
    pub store: String,
}

/// Execute list-orders
pub fn execute_list_orders(args: ListOrdersArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = OrderFile::new(&args.store);
    let orders = engine_query::list_orders(&store, args.customer_id, args.last_n)?;

    if args.customer_id == 0 {
        println!("All orders:");
    } else {
        println!("Orders for customer {}:", args.customer_id);
    }
    for order in &orders {
        println!("  order {}, customer {}", order.order_id, order.customer_id);
    }
    Ok(())
}

/// Execute list-returns
pub fn execute_list_returns(args: ListReturnsArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.page_size == 0 {
        return Err("page size must be positive".into());
    }

    let store = OrderFile::new(&args.store);
    let returns =
        engine_query::list_returns(&store, args.customer_id, args.page, args.page_size)?;

    if returns.is_empty() {
        println!("No returns found");
        return Ok(());
    }

    if args.customer_id == 0 {
        println!("All returns (page {}, size {}):", args.page, args.page_size);
    } else {
        println!(
            "Returns for customer {} (page {}, size {}):",
            args.customer_id, args.page, args.page_size
        );
    }
    for order in &returns {
        println!(
            "  order {}, customer {}, issued {}",
            order.order_id, order.customer_id, order.issued_date
        );
    }
    Ok(())
}
