//! Customer-side commands: issue-order and accept-return

use clap::Args;

use parcelpoint_core::Command;
use parcelpoint_engine::{apply_engine_command, EngineCommandResult};
use parcelpoint_store::OrderFile;

/// Arguments for issuing orders to a customer
#[derive(Debug, Args)]
pub struct IssueOrderArgs {
    /// Comma-separated order ids, e.g. 1,2,3
    #[arg(long)]
    pub orders: String,

    /// Path of the order store file
    #[arg(long, default_value = "orders.json")]
    pub store: String,
}

/// Arguments for accepting a customer return
#[derive(Debug, Args)]
pub struct AcceptReturnArgs {
    /// Order the customer brought back (non-zero)
    #[arg(long)]
    pub order_id: u64,

    /// Customer returning the order (non-zero)
    #[arg(long)]
    pub customer_id: u64,

    /// Path of the order store file
    #[arg(long, default_value = "orders.json")]
    pub store: String,
}

fn parse_order_ids(raw: &str) -> Result<Vec<u64>, String> {
    let mut ids = Vec::new();
    for item in raw.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        let id: u64 = item
            .parse()
            .map_err(|_| format!("'{}' is not an order id", item))?;
        if id == 0 {
            return Err("order id must be non-zero".to_string());
        }
        ids.push(id);
    }
    if ids.is_empty() {
        return Err("no order ids given".to_string());
    }
    Ok(ids)
}

/// Execute issue-order
pub fn execute_issue(args: IssueOrderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let order_ids = parse_order_ids(&args.orders)?;

    let store = OrderFile::new(&args.store);
    let result = apply_engine_command(Command::IssueOrders { order_ids }, &store)?;
    if let EngineCommandResult::OrdersIssued {
        order_ids,
        customer_id,
        issued_date,
    } = result
    {
        let joined = order_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "Issued orders {} to customer {} (issued {})",
            joined, customer_id, issued_date
        );
    }
    Ok(())
}

/// Execute accept-return
pub fn execute_accept_return(args: AcceptReturnArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.order_id == 0 {
        return Err("order id must be non-zero".into());
    }
    if args.customer_id == 0 {
        return Err("customer id must be non-zero".into());
    }

    let store = OrderFile::new(&args.store);
    let result = apply_engine_command(
        Command::AcceptReturn {
            order_id: args.order_id,
            customer_id: args.customer_id,
        },
        &store,
    )?;
    if let EngineCommandResult::ReturnAccepted {
        order_id,
        customer_id,
    } = result
    {
        println!(
            "Accepted return of order {} from customer {}",
            order_id, customer_id
        );
    }
    Ok(())
}
