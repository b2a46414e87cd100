//! # Submissions
//!
//! One submission capability, tagged by schema version. Deadline, tier and
//! price checks are shared; only the signature set differs.

use crate::config::SchemaVersion;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash, U256};
use w3_01_signature_authority::{RawSignature, SubmissionFields};

/// A message submission as presented by a caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
    /// Single caller signature, tier 1.
    Legacy {
        fields: SubmissionFields,
        caller_signature: RawSignature,
    },
    /// Caller and validator signatures over identical fields, tiers 2 and 3.
    Dual {
        fields: SubmissionFields,
        caller_signature: RawSignature,
        validator_signature: RawSignature,
    },
}

impl Submission {
    /// Dual-signed submission.
    #[must_use]
    pub fn dual(
        fields: SubmissionFields,
        caller_signature: impl Into<RawSignature>,
        validator_signature: impl Into<RawSignature>,
    ) -> Self {
        Self::Dual {
            fields,
            caller_signature: caller_signature.into(),
            validator_signature: validator_signature.into(),
        }
    }

    /// Caller-signed legacy submission.
    #[must_use]
    pub fn legacy(fields: SubmissionFields, caller_signature: impl Into<RawSignature>) -> Self {
        Self::Legacy {
            fields,
            caller_signature: caller_signature.into(),
        }
    }

    #[must_use]
    pub fn schema(&self) -> SchemaVersion {
        match self {
            Self::Legacy { .. } => SchemaVersion::Legacy,
            Self::Dual { .. } => SchemaVersion::Dual,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &SubmissionFields {
        match self {
            Self::Legacy { fields, .. } | Self::Dual { fields, .. } => fields,
        }
    }

    #[must_use]
    pub fn caller_signature(&self) -> &RawSignature {
        match self {
            Self::Legacy {
                caller_signature, ..
            }
            | Self::Dual {
                caller_signature, ..
            } => caller_signature,
        }
    }

    /// `None` for legacy submissions.
    #[must_use]
    pub fn validator_signature(&self) -> Option<&RawSignature> {
        match self {
            Self::Legacy { .. } => None,
            Self::Dual {
                validator_signature,
                ..
            } => Some(validator_signature),
        }
    }
}

/// What an accepted submission did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub caller: Address,
    pub tier: u64,
    /// Digest both signatures were checked against.
    pub digest: Hash,
    /// Value accepted (0 when waived).
    pub paid: U256,
    /// True if this submission made the caller premium.
    pub premium_granted: bool,
}
