// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Operational stubs for hosting platforms: a liveness payload and a
//! detailed report with named checks over the session ledger. Exit codes
//! stand in for the HTTP statuses a route would return: 0 healthy, 1
//! degraded, 2 unhealthy.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::currency::currency_by_code;
use crate::ledger::Ledger;

/// Forced in main so uptime counts from process start, not first use.
pub static STARTED: Lazy<Instant> = Lazy::new(Instant::now);

#[derive(Debug, Serialize)]
pub struct Ping {
    pub message: &'static str,
    pub timestamp: String,
    pub uptime_secs: f64,
}

pub fn ping() -> Ping {
    Ping {
        message: "pong",
        timestamp: Utc::now().to_rfc3339(),
        uptime_secs: STARTED.elapsed().as_secs_f64(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Serialize)]
pub struct Check {
    pub status: Status,
    pub details: String,
}

#[derive(Debug, Serialize)]
pub struct Platform {
    pub os: &'static str,
    pub arch: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Memory {
    pub resident_mb: f64,
    pub virtual_mb: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: Status,
    pub timestamp: String,
    pub uptime_secs: f64,
    pub version: &'static str,
    pub pid: u32,
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<Memory>,
    pub checks: BTreeMap<&'static str, Check>,
}

impl HealthReport {
    pub fn exit_code(&self) -> i32 {
        match self.status {
            Status::Healthy => 0,
            Status::Degraded => 1,
            Status::Unhealthy => 2,
        }
    }
}

/// Expenses whose wallet or currency no longer resolves. Renamed wallets
/// leave these behind.
fn check_references(ledger: &Ledger) -> Check {
    let orphaned = ledger
        .expenses
        .iter()
        .filter(|e| ledger.wallet(&e.wallet).is_none())
        .count();
    let unknown_ccy = ledger
        .expenses
        .iter()
        .filter(|e| currency_by_code(&e.currency).is_none())
        .count();
    if orphaned == 0 && unknown_ccy == 0 {
        Check {
            status: Status::Healthy,
            details: format!("{} expense(s), all references resolve", ledger.expenses.len()),
        }
    } else {
        Check {
            status: Status::Degraded,
            details: format!(
                "{} expense(s) with unknown wallet, {} with unknown currency",
                orphaned, unknown_ccy
            ),
        }
    }
}

fn check_currency_table(ledger: &Ledger) -> Check {
    let uncovered: Vec<&str> = ledger
        .wallets
        .iter()
        .filter(|w| currency_by_code(&w.currency).is_none())
        .map(|w| w.name.as_str())
        .collect();
    if uncovered.is_empty() {
        Check {
            status: Status::Healthy,
            details: format!("{} wallet(s) covered by the currency table", ledger.wallets.len()),
        }
    } else {
        Check {
            status: Status::Degraded,
            details: format!("wallet(s) outside the currency table: {}", uncovered.join(", ")),
        }
    }
}

/// CSV export needs a writable scratch location.
fn check_scratch_dir() -> Check {
    let probe = std::env::temp_dir().join(format!("rielbook-health-{}.probe", std::process::id()));
    match std::fs::write(&probe, b"ok") {
        Ok(()) => {
            let _ = std::fs::remove_file(&probe);
            Check {
                status: Status::Healthy,
                details: "scratch dir writable".into(),
            }
        }
        Err(err) => Check {
            status: Status::Degraded,
            details: format!("scratch dir not writable: {}", err),
        },
    }
}

#[cfg(target_os = "linux")]
fn memory_usage() -> Option<Memory> {
    let statm = std::fs::read_to_string("/proc/self/statm").ok()?;
    let mut fields = statm.split_whitespace();
    let virtual_pages: f64 = fields.next()?.parse().ok()?;
    let resident_pages: f64 = fields.next()?.parse().ok()?;
    let page_mb = 4096.0 / (1024.0 * 1024.0);
    Some(Memory {
        resident_mb: (resident_pages * page_mb * 100.0).round() / 100.0,
        virtual_mb: (virtual_pages * page_mb * 100.0).round() / 100.0,
    })
}

#[cfg(not(target_os = "linux"))]
fn memory_usage() -> Option<Memory> {
    None
}

pub fn detailed(ledger: &Ledger) -> HealthReport {
    let mut checks = BTreeMap::new();
    checks.insert("ledger_references", check_references(ledger));
    checks.insert("currency_table", check_currency_table(ledger));
    checks.insert("scratch_dir", check_scratch_dir());

    let status = if checks.values().all(|c| c.status == Status::Healthy) {
        Status::Healthy
    } else if checks.values().any(|c| c.status == Status::Unhealthy) {
        Status::Unhealthy
    } else {
        Status::Degraded
    };

    HealthReport {
        status,
        timestamp: Utc::now().to_rfc3339(),
        uptime_secs: STARTED.elapsed().as_secs_f64(),
        version: env!("CARGO_PKG_VERSION"),
        pid: std::process::id(),
        platform: Platform {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        },
        memory: memory_usage(),
        checks,
    }
}
