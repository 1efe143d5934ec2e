use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

use super::PeriodRecord;

pub const METRIC_EMI: &str = "EMI/Payment";
pub const METRIC_TOTAL_INTEREST: &str = "Total Interest";
pub const METRIC_TOTAL_EXTRA: &str = "Total Extra";
pub const METRIC_TOTAL_INSURANCE: &str = "Total Insurance";
pub const METRIC_TOTAL_PAID: &str = "Total Paid";
pub const METRIC_TENURE: &str = "Tenure (periods)";
pub const METRIC_LAST_PAYMENT_DATE: &str = "Last Payment Date";
pub const METRIC_PRINCIPAL: &str = "Principal (incl. fees)";

/// headline totals of a schedule
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// payment of the first period
    pub emi: Money,
    pub total_interest: Money,
    pub total_extra: Money,
    pub total_insurance: Money,
    /// payments plus extra plus insurance
    pub total_paid: Money,
    /// periods actually elapsed
    pub tenure_periods: u32,
    pub last_payment_date: Option<NaiveDate>,
    pub principal_with_fees: Money,
}

impl Summary {
    /// reduce the records into totals; an empty slice gives all zeros
    pub fn from_records(records: &[PeriodRecord], adjusted_principal: Money) -> Self {
        let (first, last) = match (records.first(), records.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Self::default(),
        };

        let total_payments: Money = records.iter().map(|r| r.payment).sum();
        let total_interest: Money = records.iter().map(|r| r.interest).sum();
        let total_extra: Money = records.iter().map(|r| r.extra).sum();
        let total_insurance: Money = records.iter().map(|r| r.insurance).sum();

        Self {
            emi: first.payment.round_cents(),
            total_interest: total_interest.round_cents(),
            total_extra: total_extra.round_cents(),
            total_insurance: total_insurance.round_cents(),
            total_paid: (total_payments + total_extra + total_insurance).round_cents(),
            tenure_periods: records.len() as u32,
            last_payment_date: Some(last.date),
            principal_with_fees: adjusted_principal.round_cents(),
        }
    }

    /// two-column metric table, in display order
    pub fn metrics(&self) -> Vec<(&'static str, String)> {
        vec![
            (METRIC_EMI, format_money(self.emi)),
            (METRIC_TOTAL_INTEREST, format_money(self.total_interest)),
            (METRIC_TOTAL_EXTRA, format_money(self.total_extra)),
            (METRIC_TOTAL_INSURANCE, format_money(self.total_insurance)),
            (METRIC_TOTAL_PAID, format_money(self.total_paid)),
            (METRIC_TENURE, self.tenure_periods.to_string()),
            (
                METRIC_LAST_PAYMENT_DATE,
                self.last_payment_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "0".to_string()),
            ),
            (METRIC_PRINCIPAL, format_money(self.principal_with_fees)),
        ]
    }
}

/// fixed two-place rendering used by tables and exports
pub fn format_money(amount: Money) -> String {
    format!("{:.2}", amount.round_cents().as_decimal())
}
