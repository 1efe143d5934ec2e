use loan_schedule_rs::chrono::NaiveDate;
use loan_schedule_rs::{
    compute_schedule, AmortizationMethod, Compounding, Decimal, LoanError, LoanParameters, Money,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn base(principal: i64, pct: Decimal, years: u32) -> LoanParameters {
    LoanParameters::builder()
        .principal(Money::from_major(principal))
        .annual_rate_pct(pct)
        .term_years(years)
        .start_date(start())
        .build()
        .unwrap()
}

/// a spread of parameter sets covering every method, frequency and modifier
fn parameter_grid() -> Vec<LoanParameters> {
    let mut grid = Vec::new();
    for compounding in [Compounding::Monthly, Compounding::Quarterly, Compounding::Yearly] {
        for method in [AmortizationMethod::ReducingBalance, AmortizationMethod::FlatInterest] {
            for (principal, pct, years) in [
                (2_500_000, dec!(9.0), 20),
                (100_000, dec!(10), 1),
                (333_333, dec!(7.35), 7),
                (75_000, dec!(0), 3),
                (0, dec!(12), 5),
                (50_000, dec!(24), 0),
            ] {
                for extra in [0, 5_000] {
                    let mut p = base(principal, pct, years);
                    p.compounding = compounding;
                    p.method = method;
                    p.extra_per_period = Money::from_major(extra);
                    p.insurance_per_period = Money::from_decimal(dec!(125.50));
                    p.fees_flat = Money::from_major(1_999);
                    p.fees_pct = dec!(1.25);
                    grid.push(p);
                }
            }
        }
    }
    grid
}

#[test]
fn last_balance_is_zero() {
    for p in parameter_grid() {
        let schedule = compute_schedule(&p).unwrap();
        let last = schedule.records.last().unwrap();
        assert_eq!(last.balance, Money::ZERO, "{:?}", p);
    }
}

#[test]
fn record_count_within_nominal_term() {
    for p in parameter_grid() {
        let schedule = compute_schedule(&p).unwrap();
        let count = schedule.records.len() as u32;
        assert!(count >= 1, "{:?}", p);
        assert!(count <= schedule.terms.total_periods, "{:?}", p);
        assert_eq!(schedule.summary.tenure_periods, count);
    }
}

#[test]
fn principal_and_extra_repay_adjusted_principal() {
    for p in parameter_grid() {
        let schedule = compute_schedule(&p).unwrap();
        let repaid: Money = schedule.records.iter().map(|r| r.principal + r.extra).sum();
        let adjusted = schedule.terms.adjusted_principal;

        assert_eq!(repaid, adjusted.round_cents(), "{:?}", p);
        assert!((repaid - adjusted).abs() <= Money::CENT, "{:?}", p);
    }
}

#[test]
fn cumulative_paid_equals_total_paid() {
    for p in parameter_grid() {
        let schedule = compute_schedule(&p).unwrap();
        let last = schedule.records.last().unwrap();
        assert_eq!(last.cumulative_paid, schedule.summary.total_paid, "{:?}", p);
    }
}

#[test]
fn balance_never_increases_and_never_overdrawn() {
    for p in parameter_grid() {
        let schedule = compute_schedule(&p).unwrap();
        let mut opening = schedule.terms.adjusted_principal.round_cents();
        for r in &schedule.records {
            assert!(r.principal <= opening, "{:?}", p);
            assert!(r.extra <= opening - r.principal, "{:?}", p);
            assert!(r.balance <= opening, "{:?}", p);
            assert!(!r.balance.is_negative(), "{:?}", p);
            opening = r.balance;
        }
    }
}

#[test]
fn identical_parameters_give_identical_results() {
    for p in parameter_grid() {
        let a = compute_schedule(&p).unwrap();
        let b = compute_schedule(&p.clone()).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn zero_rate_has_no_interest_and_even_principal() {
    let p = base(100_000, Decimal::ZERO, 3);
    let schedule = compute_schedule(&p).unwrap();
    let even = Money::from_decimal(dec!(2777.78));

    assert_eq!(schedule.records.len(), 36);
    for r in &schedule.records {
        assert_eq!(r.interest, Money::ZERO);
    }
    for r in &schedule.records[..35] {
        assert_eq!(r.principal, even);
    }
    // 100_000 - 35 * 2777.78
    assert_eq!(schedule.records[35].principal, Money::from_decimal(dec!(2777.70)));
}

#[test]
fn home_loan_scenario() {
    let p = base(2_500_000, dec!(9.0), 20);
    let schedule = compute_schedule(&p).unwrap();

    assert_eq!(schedule.summary.emi, Money::from_decimal(dec!(22493.15)));
    assert_eq!(schedule.summary.tenure_periods, 240);
    assert_eq!(schedule.summary.principal_with_fees, Money::from_major(2_500_000));
    assert_eq!(schedule.summary.total_extra, Money::ZERO);
    assert_eq!(
        schedule.summary.last_payment_date,
        Some(start() + loan_schedule_rs::chrono::Days::new(30 * 239))
    );
    assert!(!schedule.paid_off_early());

    // every period but the last pays the scheduled amount
    for r in &schedule.records[..239] {
        assert_eq!(r.payment, schedule.summary.emi);
    }
    let last = &schedule.records[239];
    assert!((last.payment - schedule.summary.emi).abs() < Money::from_major(1));
}

#[test]
fn extra_payments_shorten_tenure_and_cut_interest() {
    let baseline = compute_schedule(&base(2_500_000, dec!(9.0), 20)).unwrap();

    let mut p = base(2_500_000, dec!(9.0), 20);
    p.extra_per_period = Money::from_major(5_000);
    let accelerated = compute_schedule(&p).unwrap();

    assert!(accelerated.summary.tenure_periods < 240);
    assert!(accelerated.paid_off_early());
    assert!(accelerated.summary.total_interest < baseline.summary.total_interest);
    assert!(accelerated.summary.total_extra > Money::ZERO);
    assert_eq!(accelerated.summary.emi, baseline.summary.emi);
}

#[test]
fn flat_interest_scenario() {
    let mut p = base(100_000, dec!(10), 1);
    p.method = AmortizationMethod::FlatInterest;
    let schedule = compute_schedule(&p).unwrap();

    assert_eq!(schedule.records.len(), 12);
    for r in &schedule.records {
        // 100_000 * 0.10 / 12
        assert_eq!(r.interest, Money::from_decimal(dec!(833.33)));
    }

    // rounded per period then summed
    assert_eq!(schedule.summary.total_interest, Money::from_decimal(dec!(9999.96)));
    let analytic = Money::from_major(10_000);
    assert!((schedule.summary.total_interest - analytic).abs() < Money::from_decimal(dec!(0.05)));
}

#[test]
fn flat_interest_ignores_falling_balance() {
    let mut p = base(120_000, dec!(8), 2);
    p.method = AmortizationMethod::FlatInterest;
    p.extra_per_period = Money::from_major(10_000);
    let schedule = compute_schedule(&p).unwrap();

    let first = schedule.records[0].interest;
    assert!(schedule.records.iter().all(|r| r.interest == first));
    assert!(schedule.paid_off_early());
}

#[test]
fn flat_costs_more_than_reducing() {
    let reducing = compute_schedule(&base(500_000, dec!(11), 5)).unwrap();
    let mut p = base(500_000, dec!(11), 5);
    p.method = AmortizationMethod::FlatInterest;
    let flat = compute_schedule(&p).unwrap();

    assert!(flat.summary.total_interest > reducing.summary.total_interest);
    assert!(flat.summary.emi > reducing.summary.emi);
}

#[test]
fn fees_raise_amortized_principal() {
    let mut p = base(1_000_000, dec!(8), 10);
    p.fees_flat = Money::from_major(5_000);
    p.fees_pct = dec!(0.5);
    let schedule = compute_schedule(&p).unwrap();

    assert_eq!(schedule.summary.principal_with_fees, Money::from_major(1_010_000));
    let plain = compute_schedule(&base(1_000_000, dec!(8), 10)).unwrap();
    assert!(schedule.summary.emi > plain.summary.emi);
}

#[test]
fn zero_term_still_produces_one_period() {
    let schedule = compute_schedule(&base(10_000, dec!(12), 0)).unwrap();

    assert_eq!(schedule.records.len(), 1);
    let only = &schedule.records[0];
    assert_eq!(only.principal, Money::from_major(10_000));
    // one month of interest on the full balance
    assert_eq!(only.interest, Money::from_major(100));
    assert_eq!(only.payment, Money::from_major(10_100));
    assert_eq!(only.balance, Money::ZERO);
}

#[test]
fn out_of_range_dates_fail_without_partial_schedule() {
    let mut p = base(10_000, dec!(5), 5);
    p.start_date = NaiveDate::MAX;
    assert!(compute_schedule(&p).is_err());
}

#[test]
fn steep_yearly_rate_over_long_term_completes() {
    let mut p = base(10_000_000, dec!(400), 40);
    p.compounding = Compounding::Yearly;
    let schedule = compute_schedule(&p).unwrap();

    // 5^40 dwarfs 1, every payment but the last is pure interest
    assert_eq!(schedule.summary.emi, Money::from_major(40_000_000));
    assert_eq!(schedule.summary.tenure_periods, 40);
    assert_eq!(schedule.summary.total_interest, Money::from_major(1_600_000_000));
    assert_eq!(schedule.records.last().unwrap().balance, Money::ZERO);
}

#[test]
fn thousand_year_monthly_term_pays_interest_only() {
    let schedule = compute_schedule(&base(10_000_000, dec!(9), 1_000)).unwrap();

    assert_eq!(schedule.summary.emi, Money::from_major(75_000));
    assert_eq!(schedule.summary.tenure_periods, 12_000);
    let last = schedule.records.last().unwrap();
    assert_eq!(last.principal, Money::from_major(10_000_000));
    assert_eq!(last.balance, Money::ZERO);
    assert_eq!(last.cumulative_paid, schedule.summary.total_paid);
}

#[test]
fn amounts_beyond_decimal_range_are_an_error() {
    let mut p = base(1, dec!(12), 1);
    p.principal = Money::from_decimal(Decimal::MAX);
    p.fees_flat = Money::from_major(1);
    assert!(matches!(
        compute_schedule(&p),
        Err(LoanError::CalculationError { .. })
    ));

    p.fees_flat = Money::ZERO;
    p.annual_rate_pct = dec!(1000000);
    assert!(matches!(
        compute_schedule(&p),
        Err(LoanError::CalculationError { .. })
    ));
}
