//! Payroll service.
//!
//! The month-end run: scan the month's attendance, tally day counts per
//! employee, compute payslips, and upsert the results. The computation
//! is a pure function of the inputs; persistence happens only after
//! every payslip has been computed, so a storage failure discards the
//! run without partial commits and the caller may safely retry.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::calculation::{DayTally, compute_payslip, working_days_in_month};
use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Adjustment, Month, PayrollRecord};
use crate::store::Store;

/// Drives month-end payroll processing over the store.
pub struct PayrollService<'a, S: Store + ?Sized> {
    store: &'a S,
    policy: &'a PolicyConfig,
}

impl<'a, S: Store + ?Sized> PayrollService<'a, S> {
    /// Creates a service over the given store and policy.
    pub fn new(store: &'a S, policy: &'a PolicyConfig) -> Self {
        Self { store, policy }
    }

    /// Derives the month's working days from the holiday calendar.
    ///
    /// Counts the month's dates excluding the configured rest day and
    /// every stored holiday. Callers may use this or supply a manual
    /// override to [`process`](Self::process).
    pub fn derive_working_days(&self, month: Month) -> EngineResult<u32> {
        let holidays: HashSet<NaiveDate> =
            self.store.holidays()?.into_iter().map(|h| h.date).collect();
        Ok(working_days_in_month(
            month,
            self.policy.payroll.rest_day,
            &holidays,
        ))
    }

    /// Processes payroll for every employee for the month.
    ///
    /// Fails the whole run with `InsufficientWorkingDays` before touching
    /// any employee when `working_days` is zero. Employees absent from
    /// the adjustments map get a zero adjustment. Re-running with
    /// identical inputs overwrites the same records (the upsert conflicts
    /// on the `(employee, month)` key).
    ///
    /// Paid/unpaid flags on leave requests do not enter this
    /// computation: the attendance-record statuses already carry the
    /// leave credit.
    pub fn process(
        &self,
        month: Month,
        working_days: u32,
        adjustments: &HashMap<String, Adjustment>,
        processed_on: DateTime<Utc>,
    ) -> EngineResult<Vec<PayrollRecord>> {
        if working_days == 0 {
            return Err(EngineError::InsufficientWorkingDays { working_days });
        }

        let employees = self.store.employees()?;
        let attendance = self.store.attendance_for_month(month)?;

        let mut tallies: HashMap<&str, DayTally> = HashMap::new();
        for record in &attendance {
            tallies
                .entry(record.employee_id.as_str())
                .or_default()
                .add(record.status);
        }

        let zero = Adjustment::default();
        let mut records = Vec::with_capacity(employees.len());
        for employee in &employees {
            let tally = tallies.get(employee.id.as_str()).copied().unwrap_or_default();
            let adjustment = adjustments.get(&employee.id).unwrap_or(&zero);
            records.push(compute_payslip(
                employee,
                &tally,
                working_days,
                adjustment,
                month,
                processed_on,
            )?);
        }

        // All payslips computed; only now touch storage.
        for record in &records {
            self.store.upsert_payroll(record.clone())?;
        }

        info!(
            %month,
            working_days,
            employees = records.len(),
            "payroll processed"
        );
        Ok(records)
    }
}
