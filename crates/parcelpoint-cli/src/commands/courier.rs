//! Courier-side commands: accept-order and return-order

use chrono::NaiveDate;
use clap::Args;

use parcelpoint_core::Command;
use parcelpoint_engine::{apply_engine_command, EngineCommandResult};
use parcelpoint_store::OrderFile;

/// Arguments for accepting a new order
#[derive(Debug, Args)]
pub struct AcceptOrderArgs {
    /// Courier-assigned order id (non-zero)
    #[arg(long)]
    pub order_id: u64,

    /// Owning customer id (non-zero)
    #[arg(long)]
    pub customer_id: u64,

    /// Last holding day, YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub shelf_life: NaiveDate,

    /// Path of the order store file
    #[arg(long, default_value = "orders.json")]
    pub store: String,
}

/// Arguments for returning an order to the courier
#[derive(Debug, Args)]
pub struct ReturnOrderArgs {
    /// Order to hand back (non-zero)
    #[arg(long)]
    pub order_id: u64,

    /// Path of the order store file
    #[arg(long, default_value = "orders.json")]
    pub store: String,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    value
        .parse()
        .map_err(|_| format!("'{}' is not a YYYY-MM-DD date", value))
}

/// Execute accept-order
pub fn execute_accept(args: AcceptOrderArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.order_id == 0 {
        return Err("order id must be non-zero".into());
    }
    if args.customer_id == 0 {
        return Err("customer id must be non-zero".into());
    }

    let store = OrderFile::new(&args.store);
    let command = Command::AcceptOrder {
        order_id: args.order_id,
        customer_id: args.customer_id,
        shelf_life: args.shelf_life.to_string(),
    };

    let result = apply_engine_command(command, &store)?;
    if let EngineCommandResult::OrderAccepted {
        order_id,
        customer_id,
        shelf_life,
    } = result
    {
        println!(
            "Accepted order {} for customer {} (shelf life {})",
            order_id, customer_id, shelf_life
        );
    }
    Ok(())
}

/// Execute return-order
pub fn execute_return(args: ReturnOrderArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.order_id == 0 {
        return Err("order id must be non-zero".into());
    }

    let store = OrderFile::new(&args.store);
    let result = apply_engine_command(
        Command::ReturnOrder {
            order_id: args.order_id,
        },
        &store,
    )?;
    if let EngineCommandResult::OrderReturnedToCourier { order_id } = result {
        println!("Returned order {} to courier", order_id);
    }
    Ok(())
}
