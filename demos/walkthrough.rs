//! ATM Walkthrough
//!
//! This demo plays the host role around a single ATM session.
//!
//! Key concepts:
//! - Building a session from JSON configuration
//! - Authentication failures that leave the machine idle
//! - Withdrawals rejected for balance or machine cash
//! - Ending a customer session so the next one can begin
//!
//! Run with: RUST_LOG=cashpoint=debug cargo run --example walkthrough

use cashpoint::{AtmSession, Money, SessionConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CONFIG: &str = r#"{
    "available_cash": 5000000,
    "accounts": [
        { "account_number": "81975433120", "pin": "2311", "balance": 2000000 },
        { "account_number": "51253524113", "pin": "1234", "balance": 5000000 }
    ]
}"#;

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cashpoint=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}

fn login(atm: &mut AtmSession, number: &str, pin: &str) {
    match atm.authenticate(number, pin) {
        Ok(()) => println!("  Authentication successful for {number}"),
        Err(e) => println!("  Authentication failed: {e}"),
    }
}

fn withdraw(atm: &mut AtmSession, amount: &str) {
    let amount: Money = match amount.parse() {
        Ok(amount) => amount,
        Err(e) => {
            println!("  Bad amount: {e}");
            return;
        }
    };

    match atm.withdraw(amount) {
        Ok(()) => println!("  {amount} rupees withdrawn"),
        Err(e) => println!("  Withdrawal failed: {e}"),
    }
}

fn report(atm: &AtmSession) {
    println!("  State: {}", atm.state().name());
    println!("  Machine cash: {}", atm.available_cash());
    if let Some(account) = atm.active_account() {
        println!(
            "  Account {} balance: {}",
            account.account_number(),
            account.balance()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    println!("=== ATM Walkthrough ===\n");

    let mut atm = SessionConfig::from_json(CONFIG)?.into_session()?;

    println!("1. Unknown account and wrong PIN:");
    login(&mut atm, "00000000000", "0000");
    login(&mut atm, "81975433120", "0000");
    report(&atm);

    println!("\n2. Withdraw before logging in:");
    withdraw(&mut atm, "100");

    println!("\n3. Customer logs in and withdraws:");
    login(&mut atm, "81975433120", "2311");
    withdraw(&mut atm, "60000");
    withdraw(&mut atm, "15000");
    withdraw(&mut atm, "0");
    report(&atm);

    println!("\n4. Customer leaves, next customer empties the machine:");
    atm.exit()?;
    login(&mut atm, "51253524113", "1234");
    withdraw(&mut atm, "40000");
    withdraw(&mut atm, "35000");
    report(&atm);
    atm.exit()?;

    println!("\nTransitions recorded: {}", atm.history().len());
    for transition in atm.history().transitions() {
        println!("  {} -> {}", transition.from.name(), transition.to.name());
    }

    Ok(())
}
