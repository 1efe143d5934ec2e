use serde::{Deserialize, Serialize};

use crate::config::LoanParameters;
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

/// quantities derived once from the loan parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTerms {
    pub periods_per_year: u32,
    /// nominal period count, never below one
    pub total_periods: u32,
    pub period_rate: Rate,
    /// principal plus flat and percentage fees
    pub adjusted_principal: Money,
}

/// fails only when the fee-adjusted principal leaves the decimal range
pub fn normalize(params: &LoanParameters) -> Result<NormalizedTerms> {
    let periods_per_year = params.compounding.periods_per_year();
    let total_periods = params.term_years.saturating_mul(periods_per_year).max(1);
    let period_rate = params.annual_rate().per_period(periods_per_year);
    let adjusted_principal = params
        .principal
        .checked_percentage(params.fees_pct)
        .and_then(|pct_fee| pct_fee.checked_add(params.fees_flat))
        .and_then(|fees| fees.checked_add(params.principal))
        .ok_or_else(|| LoanError::CalculationError {
            message: format!(
                "principal {} with fees overflows the decimal range",
                params.principal
            ),
        })?;

    Ok(NormalizedTerms {
        periods_per_year,
        total_periods,
        period_rate,
        adjusted_principal,
    })
}
