use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::types::{AmortizationMethod, Compounding};

/// inputs for one schedule computation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: Money,
    /// annual rate as a percentage (9.0 for 9%)
    pub annual_rate_pct: Decimal,
    pub term_years: u32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub compounding: Compounding,
    #[serde(default)]
    pub method: AmortizationMethod,
    #[serde(default)]
    pub extra_per_period: Money,
    /// flat processing fee added to principal
    #[serde(default)]
    pub fees_flat: Money,
    /// percentage fee on principal, added to principal
    #[serde(default)]
    pub fees_pct: Decimal,
    /// charged every period on top of the payment, never amortized
    #[serde(default)]
    pub insurance_per_period: Money,
}

impl LoanParameters {
    pub fn builder() -> LoanParametersBuilder {
        LoanParametersBuilder::new()
    }

    /// the form defaults of the calculator: a home loan on a 2.5M purchase
    /// with 500k down, 9% over 20 years, paid monthly
    pub fn home_loan(start_date: NaiveDate) -> Self {
        Self {
            principal: principal_from_purchase(
                Money::from_major(2_500_000),
                Money::from_major(500_000),
            ),
            annual_rate_pct: dec!(9.0),
            term_years: 20,
            start_date,
            compounding: Compounding::Monthly,
            method: AmortizationMethod::ReducingBalance,
            extra_per_period: Money::ZERO,
            fees_flat: Money::ZERO,
            fees_pct: Decimal::ZERO,
            insurance_per_period: Money::ZERO,
        }
    }

    pub fn annual_rate(&self) -> Rate {
        Rate::from_percentage_decimal(self.annual_rate_pct)
    }

    pub fn is_flat(&self) -> bool {
        self.method.is_flat()
    }

    /// reject negative amounts and rates
    ///
    /// the engine itself accepts anything; callers that collect raw input
    /// run this before computing.
    pub fn validate(&self) -> Result<()> {
        let amounts = [
            ("principal", self.principal),
            ("extra_per_period", self.extra_per_period),
            ("fees_flat", self.fees_flat),
            ("insurance_per_period", self.insurance_per_period),
        ];
        for (name, amount) in amounts {
            if amount.is_negative() {
                return Err(LoanError::InvalidConfiguration {
                    message: format!("{} must not be negative, got {}", name, amount),
                });
            }
        }

        if self.annual_rate_pct < Decimal::ZERO {
            return Err(LoanError::InvalidConfiguration {
                message: format!("annual rate must not be negative, got {}", self.annual_rate_pct),
            });
        }

        if self.fees_pct < Decimal::ZERO {
            return Err(LoanError::InvalidConfiguration {
                message: format!("fee percentage must not be negative, got {}", self.fees_pct),
            });
        }

        Ok(())
    }

    /// load a validated parameter set from json
    pub fn from_json(json: &str) -> Result<Self> {
        let params: LoanParameters = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// requested principal for a purchase with a down payment, never below zero
pub fn principal_from_purchase(purchase_price: Money, deposit: Money) -> Money {
    (purchase_price - deposit).max(Money::ZERO)
}

/// builder for loan parameters; modifiers default to zero
#[derive(Debug, Default)]
pub struct LoanParametersBuilder {
    principal: Option<Money>,
    annual_rate_pct: Option<Decimal>,
    term_years: Option<u32>,
    start_date: Option<NaiveDate>,
    compounding: Compounding,
    method: AmortizationMethod,
    extra_per_period: Money,
    fees_flat: Money,
    fees_pct: Decimal,
    insurance_per_period: Money,
}

impl LoanParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn principal(mut self, principal: Money) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn annual_rate_pct(mut self, pct: Decimal) -> Self {
        self.annual_rate_pct = Some(pct);
        self
    }

    pub fn term_years(mut self, years: u32) -> Self {
        self.term_years = Some(years);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn compounding(mut self, compounding: Compounding) -> Self {
        self.compounding = compounding;
        self
    }

    pub fn method(mut self, method: AmortizationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn flat_interest(mut self, flat: bool) -> Self {
        self.method = AmortizationMethod::from_flat(flat);
        self
    }

    pub fn extra_per_period(mut self, extra: Money) -> Self {
        self.extra_per_period = extra;
        self
    }

    pub fn fees_flat(mut self, fee: Money) -> Self {
        self.fees_flat = fee;
        self
    }

    pub fn fees_pct(mut self, pct: Decimal) -> Self {
        self.fees_pct = pct;
        self
    }

    pub fn insurance_per_period(mut self, insurance: Money) -> Self {
        self.insurance_per_period = insurance;
        self
    }

    pub fn build(self) -> Result<LoanParameters> {
        let params = LoanParameters {
            principal: self.principal.ok_or_else(|| missing("principal"))?,
            annual_rate_pct: self.annual_rate_pct.ok_or_else(|| missing("annual_rate_pct"))?,
            term_years: self.term_years.ok_or_else(|| missing("term_years"))?,
            start_date: self.start_date.ok_or_else(|| missing("start_date"))?,
            compounding: self.compounding,
            method: self.method,
            extra_per_period: self.extra_per_period,
            fees_flat: self.fees_flat,
            fees_pct: self.fees_pct,
            insurance_per_period: self.insurance_per_period,
        };
        params.validate()?;
        Ok(params)
    }
}

fn missing(field: &str) -> LoanError {
    LoanError::InvalidConfiguration {
        message: format!("{} is required", field),
    }
}
