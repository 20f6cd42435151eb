//! Round-trips random instances of every discovered envelope kind.

use teleporter_abi::config::HarnessConfig;
use teleporter_abi::message::EnvelopeKind;
use teleporter_abi::verify::{self, VerifyError, coverage};

fn config(seed: u64) -> HarnessConfig {
    HarnessConfig {
        iterations: 16,
        max_sequence_len: 32,
        seed: Some(seed),
        parallel: true,
    }
}

#[test]
fn every_discovered_kind_has_a_template() {
    let uncovered = coverage::uncovered_in(coverage::registrations());
    assert!(uncovered.is_empty(), "no round-trip template for {uncovered:?}");
}

#[test]
fn every_discovered_kind_round_trips() {
    for seed in [0, 1, 0xdead_beef] {
        let report = verify::check_all(&config(seed));
        assert!(
            report.is_success(),
            "seed {seed} failed:\n{}",
            report
                .failures
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        );
        assert_eq!(report.passed.len(), coverage::discover().len());
    }
}

#[test]
fn full_length_sequences_round_trip() {
    let config = HarnessConfig {
        iterations: 2,
        max_sequence_len: 255,
        seed: Some(255),
        parallel: false,
    };
    for kind in EnvelopeKind::ALL {
        verify::check_kind(*kind, 255, &config).unwrap_or_else(|err| panic!("{err}"));
    }
}

#[test]
fn unregistered_kind_fails_verification() {
    let partial: Vec<_> = coverage::registrations()
        .iter()
        .filter(|registration| registration.kind != EnvelopeKind::ValidatorSetSigMessage)
        .copied()
        .collect();
    let report = verify::check_all_in(&partial, &config(3));
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0],
        VerifyError::MissingCoverageRegistration(EnvelopeKind::ValidatorSetSigMessage)
    ));
}
