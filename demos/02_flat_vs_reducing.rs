/// flat vs reducing - same loan under both interest methods
use loan_schedule_rs::chrono::NaiveDate;
use loan_schedule_rs::{compute_schedule, AmortizationMethod, Compounding, LoanParameters, Money};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?;

    for compounding in [Compounding::Monthly, Compounding::Quarterly, Compounding::Yearly] {
        println!("=== {:?} ===", compounding);
        for method in [AmortizationMethod::ReducingBalance, AmortizationMethod::FlatInterest] {
            let params = LoanParameters::builder()
                .principal(Money::from_major(500_000))
                .annual_rate_pct(dec!(11))
                .term_years(5)
                .start_date(start)
                .compounding(compounding)
                .method(method)
                .build()?;

            let schedule = compute_schedule(&params)?;
            let first = &schedule.records[0];
            println!(
                "{:<16} payment {:>12} first interest {:>10} total interest {:>12}",
                format!("{:?}", method),
                schedule.summary.emi.to_string(),
                first.interest.to_string(),
                schedule.summary.total_interest.to_string()
            );
        }
        println!();
    }

    Ok(())
}
