//! delimited-text export of schedules and summaries

use std::io::Write;

use crate::errors::Result;
use crate::schedule::{format_money, PeriodRecord, Summary};

pub const SCHEDULE_HEADER: [&str; 9] = [
    "Period",
    "Date",
    "Payment",
    "Principal",
    "Interest",
    "Extra",
    "Insurance",
    "Balance",
    "Cumulative_Paid",
];

pub const SUMMARY_HEADER: [&str; 2] = ["Metric", "Value"];

/// write the schedule table, one row per period
pub fn write_schedule_csv<W: Write>(records: &[PeriodRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(SCHEDULE_HEADER)?;

    for r in records {
        wtr.write_record([
            r.period.to_string(),
            r.date.to_string(),
            format_money(r.payment),
            format_money(r.principal),
            format_money(r.interest),
            format_money(r.extra),
            format_money(r.insurance),
            format_money(r.balance),
            format_money(r.cumulative_paid),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// write the summary as metric/value rows
pub fn write_summary_csv<W: Write>(summary: &Summary, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(SUMMARY_HEADER)?;

    for (metric, value) in summary.metrics() {
        wtr.write_record([metric, value.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn schedule_csv_string(records: &[PeriodRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_schedule_csv(records, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn summary_csv_string(summary: &Summary) -> Result<String> {
    let mut buf = Vec::new();
    write_summary_csv(summary, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
