pub mod amortization;
pub mod normalize;
pub mod payment;
pub mod summary;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LoanParameters;
use crate::decimal::Money;
use crate::errors::Result;

pub use amortization::Amortization;
pub use normalize::{normalize, NormalizedTerms};
pub use payment::base_payment;
pub use summary::{format_money, Summary};

/// one row of the amortization table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// 1-based
    pub period: u32,
    pub date: NaiveDate,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    pub extra: Money,
    pub insurance: Money,
    /// balance after this period
    pub balance: Money,
    pub cumulative_paid: Money,
}

impl PeriodRecord {
    /// cash handed over this period
    pub fn cash_paid(&self) -> Money {
        self.payment + self.extra + self.insurance
    }
}

/// where the money goes over the life of the loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub principal_with_fees: Money,
    pub interest: Money,
    pub insurance: Money,
    pub extra: Money,
}

impl CostBreakdown {
    pub fn labeled(&self) -> [(&'static str, Money); 4] {
        [
            ("Principal (incl. fees)", self.principal_with_fees),
            ("Interest", self.interest),
            ("Insurance", self.insurance),
            ("Extra", self.extra),
        ]
    }
}

/// running principal and interest paid up to a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeSplit {
    pub period: u32,
    pub principal: Money,
    pub interest: Money,
}

/// computed schedule with the inputs it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub parameters: LoanParameters,
    pub terms: NormalizedTerms,
    pub records: Vec<PeriodRecord>,
    pub summary: Summary,
}

impl AmortizationSchedule {
    pub fn into_parts(self) -> (Vec<PeriodRecord>, Summary) {
        (self.records, self.summary)
    }

    /// get record for a 1-based period
    pub fn get_period(&self, period: u32) -> Option<&PeriodRecord> {
        period
            .checked_sub(1)
            .and_then(|idx| self.records.get(idx as usize))
    }

    /// true when extra payments cleared the loan before the nominal term
    pub fn paid_off_early(&self) -> bool {
        (self.records.len() as u32) < self.terms.total_periods
    }

    pub fn cost_breakdown(&self) -> CostBreakdown {
        CostBreakdown {
            principal_with_fees: self.summary.principal_with_fees,
            interest: self.summary.total_interest,
            insurance: self.summary.total_insurance,
            extra: self.summary.total_extra,
        }
    }

    pub fn cumulative_split(&self) -> Vec<CumulativeSplit> {
        let mut principal = Money::ZERO;
        let mut interest = Money::ZERO;
        self.records
            .iter()
            .map(|r| {
                principal += r.principal;
                interest += r.interest;
                CumulativeSplit {
                    period: r.period,
                    principal,
                    interest,
                }
            })
            .collect()
    }
}

/// compute the full schedule and its summary
///
/// pure: identical parameters always give identical output. inputs are not
/// validated here, see [`LoanParameters::validate`].
pub fn compute_schedule(params: &LoanParameters) -> Result<AmortizationSchedule> {
    let terms = normalize(params)?;
    debug!(
        periods = terms.total_periods,
        period_rate = %terms.period_rate.as_decimal(),
        adjusted_principal = %terms.adjusted_principal,
        method = ?params.method,
        "normalized loan terms"
    );

    let payment = base_payment(params, &terms)?;
    debug!(%payment, "scheduled payment selected");

    let records = Amortization::new(params, terms, payment)?.collect::<Result<Vec<_>>>()?;
    let summary = Summary::from_records(&records, terms.adjusted_principal);
    debug!(
        tenure = summary.tenure_periods,
        total_interest = %summary.total_interest,
        total_paid = %summary.total_paid,
        "schedule computed"
    );

    Ok(AmortizationSchedule {
        parameters: params.clone(),
        terms,
        records,
        summary,
    })
}
