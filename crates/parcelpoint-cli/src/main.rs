//! ParcelPoint command line interface
//!
//! Thin shell over the engine: parse arguments, run one command, render the
//! outcome. Any error goes to stderr and the process exits non-zero.

use clap::{Parser, Subcommand};
use parcelpoint_core::logging::{self, Profile};

mod commands;

use commands::{courier, customer, list};

#[derive(Debug, Parser)]
#[command(name = "parcelpoint")]
#[command(about = "Pickup point order lifecycle manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Accept a new order from the courier
    AcceptOrder(courier::AcceptOrderArgs),
    /// Return an expired order to the courier
    ReturnOrder(courier::ReturnOrderArgs),
    /// Issue a batch of orders to one customer
    IssueOrder(customer::IssueOrderArgs),
    /// Accept a return from a customer
    AcceptReturn(customer::AcceptReturnArgs),
    /// List stored orders
    ListOrders(list::ListOrdersArgs),
    /// List customer returns page by page
    ListReturns(list::ListReturnsArgs),
}

fn main() {
    logging::init(Profile::Production);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::AcceptOrder(args) => courier::execute_accept(args),
        Commands::ReturnOrder(args) => courier::execute_return(args),
        Commands::IssueOrder(args) => customer::execute_issue(args),
        Commands::AcceptReturn(args) => customer::execute_accept_return(args),
        Commands::ListOrders(args) => list::execute_list_orders(args),
        Commands::ListReturns(args) => list::execute_list_returns(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
