/// extra payments - compare a baseline schedule against one with a monthly top-up
use loan_schedule_rs::chrono::NaiveDate;
use loan_schedule_rs::{compute_schedule, LoanParameters, Money};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?;
    let baseline = LoanParameters::home_loan(start);

    let mut accelerated = baseline.clone();
    accelerated.extra_per_period = Money::from_major(5_000);

    let base = compute_schedule(&baseline)?;
    let fast = compute_schedule(&accelerated)?;

    println!("=== extra payments ===\n");
    println!("{:<20} {:>16} {:>16}", "", "baseline", "+5,000/month");
    println!(
        "{:<20} {:>16} {:>16}",
        "emi",
        base.summary.emi.to_string(),
        fast.summary.emi.to_string()
    );
    println!(
        "{:<20} {:>16} {:>16}",
        "tenure (periods)", base.summary.tenure_periods, fast.summary.tenure_periods
    );
    println!(
        "{:<20} {:>16} {:>16}",
        "total interest",
        base.summary.total_interest.to_string(),
        fast.summary.total_interest.to_string()
    );
    println!(
        "{:<20} {:>16} {:>16}",
        "total paid",
        base.summary.total_paid.to_string(),
        fast.summary.total_paid.to_string()
    );

    let saved = base.summary.total_interest - fast.summary.total_interest;
    println!("\ninterest saved: {}", saved);

    Ok(())
}
