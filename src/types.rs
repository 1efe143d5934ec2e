use serde::{Deserialize, Serialize};

/// billing cycle of the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compounding {
    Monthly,
    Quarterly,
    Yearly,
}

impl Compounding {
    /// number of billing periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Compounding::Monthly => 12,
            Compounding::Quarterly => 4,
            Compounding::Yearly => 1,
        }
    }

    /// fixed day count between due dates (30/91/365 approximation)
    pub fn period_days(&self) -> u64 {
        match self {
            Compounding::Monthly => 30,
            Compounding::Quarterly => 91,
            Compounding::Yearly => 365,
        }
    }
}

impl Default for Compounding {
    fn default() -> Self {
        Compounding::Monthly
    }
}

/// how interest is charged across the term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmortizationMethod {
    /// interest on the outstanding balance, equal installments (EMI)
    ReducingBalance,
    /// interest on the fee-adjusted principal for the whole term
    FlatInterest,
}

impl AmortizationMethod {
    pub fn from_flat(flat_interest: bool) -> Self {
        if flat_interest {
            AmortizationMethod::FlatInterest
        } else {
            AmortizationMethod::ReducingBalance
        }
    }

    pub fn is_flat(&self) -> bool {
        matches!(self, AmortizationMethod::FlatInterest)
    }
}

impl Default for AmortizationMethod {
    fn default() -> Self {
        AmortizationMethod::ReducingBalance
    }
}
