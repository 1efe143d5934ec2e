/// json parameters in, csv tables out
use std::io;

use loan_schedule_rs::cache::ScheduleCache;
use loan_schedule_rs::{write_schedule_csv, write_summary_csv, LoanParameters};

const PARAMS: &str = r#"{
    "principal": "800000",
    "annual_rate_pct": "8.25",
    "term_years": 3,
    "start_date": "2024-04-01",
    "compounding": "Quarterly",
    "method": "ReducingBalance",
    "extra_per_period": "10000",
    "fees_flat": "2500",
    "fees_pct": "0.5",
    "insurance_per_period": "1200"
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = LoanParameters::from_json(PARAMS)?;

    let mut cache = ScheduleCache::default();
    let schedule = cache.get_or_compute(&params)?;
    // served from the cache the second time
    let again = cache.get_or_compute(&params)?;
    assert_eq!(schedule, again);

    println!("--- amortization_schedule.csv ---");
    write_schedule_csv(&schedule.records, io::stdout().lock())?;

    println!("\n--- loan_summary.csv ---");
    write_summary_csv(&schedule.summary, io::stdout().lock())?;

    println!("\ncache hits {} misses {}", cache.hits(), cache.misses());

    Ok(())
}
