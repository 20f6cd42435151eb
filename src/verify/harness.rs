use std::{panic, thread};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::coverage::{self, Registration};
use super::{Randomize, VerifyError};
use crate::config::HarnessConfig;
use crate::message::EnvelopeKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindReport {
    pub kind: EnvelopeKind,
    pub signature: String,
    pub seed: u64,
    pub iterations: u32,
}

#[derive(Debug)]
pub struct VerifyReport {
    pub seed: u64,
    pub passed: Vec<KindReport>,
    pub failures: Vec<VerifyError>,
}

impl VerifyReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Round-trip `config.iterations` random instances of one registered kind.
///
/// The declared shape is checked first, so an unsupported field fails the
/// kind before any value is generated.
pub fn check_registration(
    registration: &Registration,
    seed: u64,
    config: &HarnessConfig,
) -> Result<KindReport, VerifyError> {
    let kind = registration.kind;
    let shape = kind.param_type();
    shape
        .validate()
        .map_err(|reason| VerifyError::UnsupportedFieldShape { kind, reason })?;

    let limits = config.limits();
    let mut rng = StdRng::seed_from_u64(seed);
    for iteration in 0..config.iterations {
        let mut original = (registration.template)();
        original.randomize(&mut rng, &limits);
        let packed = original.pack();

        let mut decoded = (registration.template)();
        decoded
            .unpack(&packed)
            .map_err(|source| VerifyError::Codec { kind, source })?;

        if decoded != original {
            warn!(%kind, seed, iteration, "round trip mismatch");
            return Err(VerifyError::Mismatch {
                kind,
                seed,
                diff: line_diff(&format!("{original:#?}"), &format!("{decoded:#?}")),
            });
        }
    }

    debug!(%kind, seed, iterations = config.iterations, "round trip ok");
    Ok(KindReport {
        kind,
        signature: shape.to_string(),
        seed,
        iterations: config.iterations,
    })
}

pub fn check_kind(
    kind: EnvelopeKind,
    seed: u64,
    config: &HarnessConfig,
) -> Result<KindReport, VerifyError> {
    check_registration(&coverage::lookup(kind)?, seed, config)
}

/// Check every discovered kind against the built-in registrations.
pub fn check_all(config: &HarnessConfig) -> VerifyReport {
    check_all_in(coverage::registrations(), config)
}

/// Check every discovered kind against `registrations`.
///
/// Kind `i` in discovery order uses seed `base + i`, so a failing kind can be
/// replayed alone. A panic while checking a kind propagates to the caller in
/// both parallel and sequential runs.
pub fn check_all_in(registrations: &[Registration], config: &HarnessConfig) -> VerifyReport {
    let base = config.seed.unwrap_or_else(rand::random);
    info!(
        seed = base,
        iterations = config.iterations,
        "verifying envelope round trips"
    );

    let jobs: Vec<(EnvelopeKind, u64)> = coverage::discover()
        .iter()
        .enumerate()
        .map(|(index, kind)| (*kind, base.wrapping_add(index as u64)))
        .collect();

    let run = |(kind, seed): (EnvelopeKind, u64)| {
        coverage::lookup_in(registrations, kind)
            .and_then(|registration| check_registration(&registration, seed, config))
    };

    let results: Vec<Result<KindReport, VerifyError>> = if config.parallel {
        thread::scope(|scope| {
            let handles: Vec<_> = jobs
                .iter()
                .map(|job| scope.spawn(move || run(*job)))
                .collect();
            handles
                .into_iter()
                .map(|handle| {
                    // Re-raise on the caller's thread, same as a sequential run.
                    handle
                        .join()
                        .unwrap_or_else(|payload| panic::resume_unwind(payload))
                })
                .collect()
        })
    } else {
        jobs.iter().map(|job| run(*job)).collect()
    };

    let mut report = VerifyReport {
        seed: base,
        passed: Vec::new(),
        failures: Vec::new(),
    };
    for result in results {
        match result {
            Ok(kind_report) => report.passed.push(kind_report),
            Err(err) => {
                warn!(kind = %err.kind(), error = %err, "verification failed");
                report.failures.push(err);
            }
        }
    }
    report
}

/// Minimal line diff: `-` lines from `left`, `+` lines from `right`, with
/// matching lines kept as context.
fn line_diff(left: &str, right: &str) -> String {
    let left: Vec<&str> = left.lines().collect();
    let right: Vec<&str> = right.lines().collect();
    let mut out = String::new();
    for index in 0..left.len().max(right.len()) {
        match (left.get(index), right.get(index)) {
            (Some(l), Some(r)) if l == r => {
                out.push_str("  ");
                out.push_str(l);
                out.push('\n');
            }
            (l, r) => {
                if let Some(l) = l {
                    out.push_str("- ");
                    out.push_str(l);
                    out.push('\n');
                }
                if let Some(r) = r {
                    out.push_str("+ ");
                    out.push_str(r);
                    out.push('\n');
                }
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
