//! The persisted result record and its integrity hash.

use bazi_base::ChartProfile;
use bazi_report::{Report, UserContext};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::StoreError;

/// Format version written into every record.
pub const RECORD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything needed to show a result again without recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub chart_profile: ChartProfile,
    pub user_context: UserContext,
    pub report: Report,
}

/// A snapshot sealed with a token, hash and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Identifies one submission.
    pub token: Uuid,
    pub snapshot: Snapshot,
    /// Lowercase hex SHA-256 of the snapshot's JSON encoding.
    pub integrity_hash: String,
    /// Seal time, serialized as UTC milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl StoredRecord {
    /// Seal a snapshot now, with a fresh random token.
    pub fn seal(snapshot: Snapshot) -> Result<Self, StoreError> {
        Self::seal_at(snapshot, Uuid::new_v4(), Utc::now())
    }

    /// Seal with an explicit token and time, truncated to milliseconds.
    pub fn seal_at(
        snapshot: Snapshot,
        token: Uuid,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, StoreError> {
        let integrity_hash = snapshot_hash(&snapshot)?;
        Ok(Self {
            token,
            snapshot,
            integrity_hash,
            timestamp: timestamp.trunc_subsecs(3),
            version: RECORD_VERSION.to_string(),
        })
    }

    /// Recompute the snapshot hash and compare it with the stored one.
    pub fn verify(&self) -> Result<(), StoreError> {
        let actual = snapshot_hash(&self.snapshot)?;
        if actual == self.integrity_hash {
            Ok(())
        } else {
            Err(StoreError::IntegrityMismatch {
                expected: self.integrity_hash.clone(),
                actual,
            })
        }
    }
}

/// Hex SHA-256 over the compact JSON encoding of a snapshot.
pub fn snapshot_hash(snapshot: &Snapshot) -> Result<String, StoreError> {
    let bytes = serde_json::to_vec(snapshot)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

#[cfg(test)]
pub(crate) mod tests {
    use bazi_base::{ChartOptions, build_chart_profile};
    use bazi_report::{Avoidance, Energy, FirstChoice, FocusArea, Strategy, generate_report};
    use bazi_time::{BirthInput, REFERENCE_TIMEZONE};
    use chrono::TimeZone;

    use super::*;

    pub(crate) fn sample_snapshot() -> Snapshot {
        let birth = BirthInput::new(1990, 1, 1, 12, 0, REFERENCE_TIMEZONE);
        let chart_profile = build_chart_profile(&birth, &ChartOptions::default()).unwrap();
        let user_context = UserContext::new(
            FocusArea::Wealth,
            "Building savings",
            Strategy::HoldSteady,
            vec![Avoidance::ImpulsiveSpending],
            Energy::Steady,
        )
        .unwrap();
        let report = generate_report(&chart_profile, &user_context, &mut FirstChoice);
        Snapshot {
            chart_profile,
            user_context,
            report,
        }
    }

    #[test]
    fn seal_then_verify() {
        let r = StoredRecord::seal(sample_snapshot()).unwrap();
        assert_eq!(r.integrity_hash.len(), 64);
        assert!(r.integrity_hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(r.version, RECORD_VERSION);
        r.verify().unwrap();
    }

    #[test]
    fn hash_depends_only_on_snapshot() {
        let s = sample_snapshot();
        let t = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let a = StoredRecord::seal_at(s.clone(), Uuid::new_v4(), t).unwrap();
        let b = StoredRecord::seal(s).unwrap();
        assert_eq!(a.integrity_hash, b.integrity_hash);
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn tampered_snapshot_fails_verification() {
        let mut r = StoredRecord::seal(sample_snapshot()).unwrap();
        r.snapshot.report.overall.score = 95;
        match r.verify() {
            Err(StoreError::IntegrityMismatch { expected, actual }) => {
                assert_eq!(expected, r.integrity_hash);
                assert_ne!(expected, actual);
            }
            other => panic!("expected IntegrityMismatch, got {other:?}"),
        }
    }

    #[test]
    fn timestamp_serializes_as_millis() {
        let t = Utc.timestamp_millis_opt(1_767_225_600_123).unwrap();
        let r = StoredRecord::seal_at(sample_snapshot(), Uuid::nil(), t).unwrap();
        let v: serde_json::Value = serde_json::to_value(&r).unwrap();
        assert_eq!(v["timestamp"], 1_767_225_600_123_i64);
        assert_eq!(v["token"], "00000000-0000-0000-0000-000000000000");
    }
}
