//! # Inbound Ports (Driving Ports / API)

use crate::domain::submission::{Submission, SubmissionReceipt};
use crate::errors::FeeRouterError;
use shared_types::{Address, Hash, U256};
use w3_01_signature_authority::SubmissionFields;
use w3_02_host_ledger::{Call, Ledger};

/// Primary Fee Router API.
pub trait FeeRouterApi {
    /// Validate a submission, collect its fee and route the proceeds.
    ///
    /// Atomic: any failure leaves balances, the premium registry and the
    /// event log untouched.
    fn submit_message(
        &mut self,
        ledger: &mut Ledger,
        call: &Call,
        submission: &Submission,
    ) -> Result<SubmissionReceipt, FeeRouterError>;

    /// Owner-only: deliver all retained proceeds to `to`. Returns the amount.
    fn withdraw_proceeds(
        &mut self,
        ledger: &mut Ledger,
        call: &Call,
        to: Address,
    ) -> Result<U256, FeeRouterError>;

    /// True once `account` has paid the premium tier.
    fn is_premium(&self, account: &Address) -> bool;

    /// Configured price of `tier`, if the tier is priced.
    fn price_for(&self, tier: u64) -> Option<U256>;

    /// Typed-data domain separator of this router.
    fn domain_separator(&self) -> Hash;

    /// Digest a submission with `fields` must be signed over.
    fn submission_digest(&self, fields: &SubmissionFields) -> Hash;

    fn chain_id(&self) -> u64;

    fn validator(&self) -> Address;

    fn owner(&self) -> Address;
}
