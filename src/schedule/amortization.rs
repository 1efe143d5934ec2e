use chrono::{Days, NaiveDate};
use tracing::{debug, trace};

use crate::config::LoanParameters;
use crate::decimal::Money;
use crate::errors::{LoanError, Result};

use super::{NormalizedTerms, PeriodRecord};

/// walks the schedule one period at a time
///
/// amounts are rounded to cents as each record is made and the balance is
/// carried in cents, so the principal and extra columns add back up to the
/// rounded adjusted principal. stops at the nominal period count or as soon
/// as the balance is cleared, whichever comes first.
pub struct Amortization {
    terms: NormalizedTerms,
    scheduled_payment: Money,
    /// per-period interest of the flat method, fixed for the whole term
    flat_interest: Option<Money>,
    extra_per_period: Money,
    insurance_per_period: Money,
    start_date: NaiveDate,
    period_days: u64,
    balance: Money,
    cumulative_paid: Money,
    period: u32,
    finished: bool,
}

impl Amortization {
    pub fn new(
        params: &LoanParameters,
        terms: NormalizedTerms,
        base_payment: Money,
    ) -> Result<Self> {
        let flat_interest = if params.is_flat() {
            let interest = terms
                .adjusted_principal
                .checked_mul(terms.period_rate.as_decimal())
                .ok_or_else(|| LoanError::CalculationError {
                    message: format!(
                        "flat interest on {} overflows the decimal range",
                        terms.adjusted_principal
                    ),
                })?;
            Some(interest.round_cents())
        } else {
            None
        };

        Ok(Self {
            terms,
            scheduled_payment: base_payment.round_cents(),
            flat_interest,
            extra_per_period: params.extra_per_period.round_cents(),
            insurance_per_period: params.insurance_per_period.round_cents(),
            start_date: params.start_date,
            period_days: params.compounding.period_days(),
            balance: terms.adjusted_principal.round_cents(),
            cumulative_paid: Money::ZERO,
            period: 0,
            finished: false,
        })
    }

    fn due_date(&self, period: u32) -> Result<NaiveDate> {
        let offset = self
            .period_days
            .checked_mul(u64::from(period - 1))
            .ok_or_else(|| LoanError::InvalidDate {
                message: format!("due date offset overflows for period {}", period),
            })?;
        self.start_date
            .checked_add_days(Days::new(offset))
            .ok_or_else(|| LoanError::InvalidDate {
                message: format!(
                    "due date of period {} is out of range from {}",
                    period, self.start_date
                ),
            })
    }

    fn step(&mut self) -> Result<PeriodRecord> {
        let period = self.period + 1;
        let date = self.due_date(period)?;
        let opening = self.balance;

        let interest = match self.flat_interest {
            Some(flat) => flat,
            None => opening
                .checked_mul(self.terms.period_rate.as_decimal())
                .ok_or_else(|| overflow(period))?
                .round_cents(),
        };

        // the last nominal period settles any rounding residue
        let mut principal = self.scheduled_payment - interest;
        let mut payment = self.scheduled_payment;
        if period == self.terms.total_periods || principal >= opening {
            principal = opening;
            payment = principal.checked_add(interest).ok_or_else(|| overflow(period))?;
        }

        let extra = self
            .extra_per_period
            .min((opening - principal).max(Money::ZERO));
        let closing = (opening - principal - extra).max(Money::ZERO);

        self.cumulative_paid = payment
            .checked_add(extra)
            .and_then(|cash| cash.checked_add(self.insurance_per_period))
            .and_then(|cash| cash.checked_add(self.cumulative_paid))
            .ok_or_else(|| overflow(period))?;
        self.balance = closing;
        self.period = period;

        trace!(
            period,
            %opening,
            %interest,
            %principal,
            %extra,
            %closing,
            "period posted"
        );

        Ok(PeriodRecord {
            period,
            date,
            payment,
            principal,
            interest,
            extra,
            insurance: self.insurance_per_period,
            balance: closing,
            cumulative_paid: self.cumulative_paid,
        })
    }
}

fn overflow(period: u32) -> LoanError {
    LoanError::CalculationError {
        message: format!("period {} amounts overflow the decimal range", period),
    }
}

impl Iterator for Amortization {
    type Item = Result<PeriodRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let record = match self.step() {
            Ok(record) => record,
            Err(e) => {
                self.finished = true;
                return Some(Err(e));
            }
        };

        if record.balance.is_zero() || record.period >= self.terms.total_periods {
            self.finished = true;
            if record.balance.is_zero() && record.period < self.terms.total_periods {
                debug!(
                    period = record.period,
                    nominal = self.terms.total_periods,
                    "balance cleared before term end"
                );
            }
        }

        Some(Ok(record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = (self.terms.total_periods - self.period) as usize;
        (1.min(remaining), Some(remaining))
    }
}
