//! admin-runner: headless console for the loyalty admin core.
//!
//! Usage:
//!   admin-runner --seed 42 --customers 25
//!   admin-runner --seed 42 --export snapshot.json
//!   admin-runner --import snapshot.json --ipc-mode

use anyhow::Result;
use chrono::Utc;
use loyalty_core::{
    command::{dispatch, AdminCommand},
    config::AdminConfig,
    seed,
    snapshot::AdminSnapshot,
    store::{AdminStore, Customer, CustomerPatch, Transaction},
};
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed_arg = parse_arg(&args, "--seed", 42u64);
    let extra_customers = parse_arg(&args, "--customers", 0usize);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let no_latency = args.iter().any(|a| a == "--no-latency");
    let export = args
        .windows(2)
        .find(|w| w[0] == "--export")
        .map(|w| w[1].clone());
    let import = args
        .windows(2)
        .find(|w| w[0] == "--import")
        .map(|w| w[1].clone());

    let mut config = AdminConfig::new(seed_arg);
    if no_latency {
        config.latency = None;
    }

    let mut store = match &import {
        Some(path) => AdminSnapshot::read_file(path)?.restore(&config),
        None => AdminStore::from_dataset(
            &config,
            seed::expanded_demo_dataset(seed_arg, extra_customers),
        ),
    };

    if ipc_mode {
        run_ipc_loop(&mut store)?;
    } else {
        println!("loyalty admin — admin-runner");
        println!("  seed:      {seed_arg}");
        println!("  customers: +{extra_customers}");
        println!(
            "  latency:   {}",
            if store.latency_enabled() { "on" } else { "off" }
        );
        println!();
        run_demo_session(&mut store);
        print_summary(&store);
    }

    if let Some(path) = &export {
        AdminSnapshot::capture(&store).write_file(path)?;
        println!("snapshot written to {path}");
    }

    Ok(())
}

/// Line-delimited JSON command loop: one `AdminCommand` in, one
/// `CommandOutcome` (or an error object) out.
fn run_ipc_loop(store: &mut AdminStore) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let command: AdminCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{err_json}")?;
                stdout.flush()?;
                continue;
            }
        };

        let reply = match dispatch(store, command) {
            Ok(outcome) => serde_json::to_value(&outcome)?,
            Err(e) => serde_json::json!({ "error": e.to_string() }),
        };
        writeln!(stdout, "{reply}")?;
        stdout.flush()?;
    }

    Ok(())
}

/// The call sequence one dashboard session produces: create, re-read,
/// patch, resolve children, delete.
fn run_demo_session(store: &mut AdminStore) {
    let signup = store.create_customer(Customer {
        customer_id: 0,
        name: "Walk-in Signup".into(),
        email: "walkin@example.com".into(),
        phone: "555-000-0000".into(),
        joined_on: Utc::now().date_naive(),
        status: "active".into(),
    });
    println!("signed up customer {} ({})", signup.customer_id, signup.name);

    let txn = store.create_transaction(Transaction {
        transaction_id: 0,
        customer_id: signup.customer_id,
        business_id: 1,
        product_id: Some(1),
        amount: 4.50,
        points_earned: 5,
        occurred_at: Utc::now(),
        payment_method: "card".into(),
    });
    println!(
        "recorded transaction {} for {:.2}",
        txn.transaction_id, txn.amount
    );

    let patch = CustomerPatch {
        phone: Some("555-000-1111".into()),
        ..Default::default()
    };
    if store.update_customer(signup.customer_id, &patch).is_none() {
        log::warn!("customer {} vanished mid-session", signup.customer_id);
    }

    // Business overview pages resolve their children client-side.
    println!();
    for business in store.list_businesses() {
        let offers = store.offers_for_business(business.business_id);
        let feedback = store.feedback_for_business(business.business_id);
        let avg_rating = if feedback.is_empty() {
            0.0
        } else {
            feedback.iter().map(|f| f.rating as f64).sum::<f64>() / feedback.len() as f64
        };
        println!(
            "  {:<26} offers: {:<2}  avg rating: {avg_rating:.1}",
            business.name,
            offers.len()
        );
    }
    println!();

    let removed = store.delete_transaction(txn.transaction_id);
    log::info!("demo transaction removed: {removed}");
}

fn print_summary(store: &AdminStore) {
    let counts = store.counts();
    println!("store contents:");
    println!("  businesses:       {:>5}", counts.businesses);
    println!("  products:         {:>5}", counts.products);
    println!("  customers:        {:>5}", counts.customers);
    println!("  offers:           {:>5}", counts.offers);
    println!("  transactions:     {:>5}", counts.transactions);
    println!("  redemptions:      {:>5}", counts.redemptions);
    println!("  loyalty accounts: {:>5}", counts.loyalty_accounts);
    println!("  tiers:            {:>5}", counts.tiers);
    println!("  customer tiers:   {:>5}", counts.customer_tiers);
    println!("  referrals:        {:>5}", counts.referrals);
    println!("  feedback:         {:>5}", counts.feedback);
    println!("  promotions:       {:>5}", counts.promotions);
    println!("  fraud flags:      {:>5}", counts.fraud_flags);
    println!("  analytics:        {:>5}", counts.analytics);
    println!("  admin users:      {:>5}", counts.admin_users);
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
