pub mod cache;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod export;
pub mod schedule;
pub mod types;

// re-export key types
pub use cache::ScheduleCache;
pub use config::{principal_from_purchase, LoanParameters, LoanParametersBuilder};
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use export::{schedule_csv_string, summary_csv_string, write_schedule_csv, write_summary_csv};
pub use schedule::{
    compute_schedule, AmortizationSchedule, CostBreakdown, CumulativeSplit, NormalizedTerms,
    PeriodRecord, Summary,
};
pub use types::{AmortizationMethod, Compounding};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
