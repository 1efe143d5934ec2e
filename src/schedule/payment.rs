use rust_decimal::Decimal;
use tracing::debug;

use crate::config::LoanParameters;
use crate::decimal::Money;
use crate::errors::{LoanError, Result};

use super::NormalizedTerms;

/// scheduled payment per period, before rounding
///
/// flat interest: the whole-term simple interest on the adjusted principal
/// plus that principal, spread evenly over the periods.
///
/// reducing balance: the annuity payment
/// `P * r * (1 + r)^n / ((1 + r)^n - 1)`, or straight-line `P / n` at a
/// zero rate. once `(1 + r)^n` outgrows the decimal range the annuity
/// factor is 1 at full precision and the payment is `P * r`.
pub fn base_payment(params: &LoanParameters, terms: &NormalizedTerms) -> Result<Money> {
    let principal = terms.adjusted_principal;
    let n = Decimal::from(terms.total_periods);

    if params.is_flat() {
        let total = principal
            .checked_mul(params.annual_rate().as_decimal())
            .and_then(|i| i.checked_mul(Decimal::from(params.term_years)))
            .and_then(|interest| interest.checked_add(principal))
            .ok_or_else(|| overflow(params))?;
        return Ok(total / n);
    }

    let r = terms.period_rate;
    if r.is_zero() {
        return Ok(principal / n);
    }

    let annuity_factor = match r.growth_factor(terms.total_periods) {
        Some(compound) => {
            let denominator = compound - Decimal::ONE;
            // 1 + r rounds to 1 when r is below the decimal's resolution
            if denominator.is_zero() {
                return Ok(principal / n);
            }
            compound
                .checked_div(denominator)
                .ok_or_else(|| overflow(params))?
        }
        None => {
            debug!(
                periods = terms.total_periods,
                "growth factor saturated, paying interest only"
            );
            Decimal::ONE
        }
    };

    principal
        .checked_mul(r.as_decimal())
        .and_then(|interest| interest.checked_mul(annuity_factor))
        .ok_or_else(|| overflow(params))
}

fn overflow(params: &LoanParameters) -> LoanError {
    LoanError::CalculationError {
        message: format!(
            "payment on {} at {}% over {} years overflows the decimal range",
            params.principal, params.annual_rate_pct, params.term_years
        ),
    }
}
