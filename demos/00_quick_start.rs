/// quick start - minimal example to get started
use loan_schedule_rs::chrono::NaiveDate;
use loan_schedule_rs::{compute_schedule, LoanParameters, Money};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 20 lakh home loan at 9% over 20 years
    let params = LoanParameters::builder()
        .principal(Money::from_major(2_000_000))
        .annual_rate_pct(dec!(9.0))
        .term_years(20)
        .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?)
        .build()?;

    let schedule = compute_schedule(&params)?;

    for (metric, value) in schedule.summary.metrics() {
        println!("{:<24} {}", metric, value);
    }

    Ok(())
}
