//! Leave balance settlement.
//!
//! This module contains the pure arithmetic of the leave ledger: how many
//! days a request debits, how much accrual the balance has earned since
//! it was last touched, whether the leave is paid, and the resulting
//! balance. Persistence is the leave service's job.

use rust_decimal::Decimal;

use crate::config::LeaveRules;
use crate::models::{LeaveBalance, LeaveSession, Month};

/// The result of settling one approved leave against a balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerOutcome {
    /// The days debited for the request (0.5 or 1.0).
    pub days_count: Decimal,
    /// The accrual added before debiting (zero when the balance was
    /// already current for the leave month).
    pub accrued: Decimal,
    /// Whether the balance covered the debit.
    pub is_paid: bool,
    /// The balance to persist on the employee.
    pub balance: LeaveBalance,
}

/// Returns the days a request debits: 1.0 for a full-day session, 0.5
/// for either half session.
///
/// The debit applies to the request as a whole, not per day of its
/// range.
pub fn days_count_for(session: LeaveSession) -> Decimal {
    match session {
        LeaveSession::FullDay => Decimal::ONE,
        LeaveSession::FirstHalf | LeaveSession::SecondHalf => Decimal::new(5, 1),
    }
}

/// Settles one approved leave request against the employee's balance.
///
/// Accrual first: when the stored balance month is unset or differs from
/// `leave_month`, the balance earns `monthly_accrual_days x max(1,
/// months_elapsed)` where `months_elapsed` is the whole-month difference
/// from the stored month to the leave month (an unset month counts as one
/// elapsed month). A balance already current for `leave_month` earns
/// nothing, so approving several leaves in one month accrues only once.
///
/// Then the debit: the leave is paid when the accrued balance covers
/// `days_count`; either way the request is approved, and the new balance
/// clamps at zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::settle_leave;
/// use payroll_engine::config::PolicyConfig;
/// use payroll_engine::models::{LeaveBalance, LeaveSession};
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// let outcome = settle_leave(
///     &LeaveBalance::empty(),
///     "2026-02".parse().unwrap(),
///     LeaveSession::FullDay,
///     &policy.leave,
/// );
/// assert!(outcome.is_paid);
/// assert_eq!(outcome.balance.days, Decimal::ONE); // 2 accrued - 1 debited
/// ```
pub fn settle_leave(
    current: &LeaveBalance,
    leave_month: Month,
    session: LeaveSession,
    rules: &LeaveRules,
) -> LedgerOutcome {
    let days_count = days_count_for(session);

    let accrued = match current.month {
        Some(month) if month == leave_month => Decimal::ZERO,
        Some(month) => {
            let elapsed = leave_month.months_since(month).max(1);
            rules.monthly_accrual_days * Decimal::from(elapsed)
        }
        None => rules.monthly_accrual_days,
    };

    let available = current.days + accrued;
    let is_paid = available >= days_count;
    let remaining = (available - days_count).max(Decimal::ZERO);

    LedgerOutcome {
        days_count,
        accrued,
        is_paid,
        balance: LeaveBalance {
            days: remaining,
            month: Some(leave_month),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyConfig;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rules() -> LeaveRules {
        PolicyConfig::default().leave
    }

    fn month(s: &str) -> Month {
        s.parse().unwrap()
    }

    fn balance(days: &str, m: Option<&str>) -> LeaveBalance {
        LeaveBalance {
            days: dec(days),
            month: m.map(month),
        }
    }

    #[test]
    fn test_days_count_per_session() {
        assert_eq!(days_count_for(LeaveSession::FullDay), dec("1"));
        assert_eq!(days_count_for(LeaveSession::FirstHalf), dec("0.5"));
        assert_eq!(days_count_for(LeaveSession::SecondHalf), dec("0.5"));
    }

    /// LL-001: first ever approval accrues one month of leave
    #[test]
    fn test_first_approval_accrues_and_pays() {
        let outcome = settle_leave(
            &LeaveBalance::empty(),
            month("2026-02"),
            LeaveSession::FullDay,
            &rules(),
        );
        assert_eq!(outcome.accrued, dec("2"));
        assert!(outcome.is_paid);
        assert_eq!(outcome.balance.days, dec("1"));
        assert_eq!(outcome.balance.month, Some(month("2026-02")));
    }

    /// LL-002: a second approval in the same month does not double-accrue
    #[test]
    fn test_second_approval_in_same_month_uses_stored_balance() {
        let outcome = settle_leave(
            &balance("1", Some("2026-02")),
            month("2026-02"),
            LeaveSession::FullDay,
            &rules(),
        );
        assert_eq!(outcome.accrued, dec("0"));
        assert!(outcome.is_paid); // balance was exactly sufficient
        assert_eq!(outcome.balance.days, dec("0"));
    }

    /// LL-003: a third approval in the same month goes unpaid, clamped at zero
    #[test]
    fn test_third_approval_is_unpaid_and_clamped() {
        let outcome = settle_leave(
            &balance("0", Some("2026-02")),
            month("2026-02"),
            LeaveSession::FullDay,
            &rules(),
        );
        assert!(!outcome.is_paid);
        assert_eq!(outcome.balance.days, dec("0"));
    }

    /// LL-004: a month gap accrues once per elapsed month
    #[test]
    fn test_multi_month_gap_accrues_per_month() {
        let outcome = settle_leave(
            &balance("0.5", Some("2026-01")),
            month("2026-04"),
            LeaveSession::FullDay,
            &rules(),
        );
        // 3 months elapsed at 2 days each.
        assert_eq!(outcome.accrued, dec("6"));
        assert_eq!(outcome.balance.days, dec("5.5"));
        assert_eq!(outcome.balance.month, Some(month("2026-04")));
    }

    /// LL-005: a back-dated leave month still accrues at least one month
    #[test]
    fn test_back_dated_leave_accrues_one_month() {
        let outcome = settle_leave(
            &balance("0", Some("2026-03")),
            month("2026-02"),
            LeaveSession::FullDay,
            &rules(),
        );
        assert_eq!(outcome.accrued, dec("2"));
        assert!(outcome.is_paid);
        assert_eq!(outcome.balance.days, dec("1"));
        // The stored month follows the leave, matching the observed
        // last-write-wins behavior.
        assert_eq!(outcome.balance.month, Some(month("2026-02")));
    }

    #[test]
    fn test_half_day_debits_half() {
        let outcome = settle_leave(
            &LeaveBalance::empty(),
            month("2026-02"),
            LeaveSession::FirstHalf,
            &rules(),
        );
        assert_eq!(outcome.days_count, dec("0.5"));
        assert!(outcome.is_paid);
        assert_eq!(outcome.balance.days, dec("1.5"));
    }

    #[test]
    fn test_partial_balance_still_goes_unpaid_whole() {
        // 0.5 available against a full-day debit: unpaid, clamped to zero,
        // the fraction is consumed.
        let outcome = settle_leave(
            &balance("0.5", Some("2026-02")),
            month("2026-02"),
            LeaveSession::FullDay,
            &rules(),
        );
        assert!(!outcome.is_paid);
        assert_eq!(outcome.balance.days, dec("0"));
    }

    #[test]
    fn test_year_boundary_gap() {
        let outcome = settle_leave(
            &balance("0", Some("2025-11")),
            month("2026-02"),
            LeaveSession::FullDay,
            &rules(),
        );
        assert_eq!(outcome.accrued, dec("6"));
        assert_eq!(outcome.balance.days, dec("5"));
    }

    #[test]
    fn test_balance_never_negative() {
        for days in ["0", "0.25", "0.5", "0.99"] {
            let outcome = settle_leave(
                &balance(days, Some("2026-02")),
                month("2026-02"),
                LeaveSession::FullDay,
                &rules(),
            );
            assert!(outcome.balance.days >= Decimal::ZERO);
        }
    }
}
