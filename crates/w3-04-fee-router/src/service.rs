//! # Fee Router Service
//!
//! The deployed router contract. Generic over the signature authority so the
//! recovery backend can be swapped in tests.

use crate::config::{FeeRouterConfig, PriceTable, ProceedsRoute, SchemaVersion};
use crate::domain::payment::{check_payment, required_payment, Payment};
use crate::domain::premium::PremiumRegistry;
use crate::domain::submission::{Submission, SubmissionReceipt};
use crate::domain::tiers::{is_valid_tier, PREMIUM_TIER};
use crate::errors::FeeRouterError;
use crate::events::{PremiumGranted, ProceedsWithdrawn, Signer};
use crate::ports::inbound::FeeRouterApi;
use shared_types::{Address, Hash, U256};
use tracing::{debug, info, instrument, warn};
use w3_01_signature_authority::{
    domain_separator, SignatureAuthority, SignatureAuthorityApi, SubmissionFields, TypedDataDomain,
};
use w3_02_host_ledger::{transact, Call, Contract, Ledger};

/// The fee router contract.
#[derive(Debug)]
pub struct FeeRouter<A: SignatureAuthorityApi = SignatureAuthority> {
    address: Address,
    domain: TypedDataDomain,
    validator: Address,
    owner: Address,
    schema: SchemaVersion,
    proceeds: ProceedsRoute,
    price_table: PriceTable,
    premium: PremiumRegistry,
    authority: A,
}

impl<A: SignatureAuthorityApi + 'static> Contract for FeeRouter<A> {
    type Snapshot = PremiumRegistry;

    fn address(&self) -> Address {
        self.address
    }

    fn snapshot(&self) -> PremiumRegistry {
        self.premium.clone()
    }

    fn restore(&mut self, snapshot: PremiumRegistry) {
        self.premium = snapshot;
    }
}

impl FeeRouter<SignatureAuthority> {
    /// Deploy a router backed by the secp256k1 signature authority.
    pub fn deploy(
        ledger: &mut Ledger,
        deployer: Address,
        config: FeeRouterConfig,
    ) -> Result<Self, FeeRouterError> {
        Self::deploy_with(ledger, deployer, config, SignatureAuthority::new())
    }
}

impl<A: SignatureAuthorityApi + 'static> FeeRouter<A> {
    /// Deploy a router with a specific signature authority.
    ///
    /// The typed-data domain binds the ledger's chain id and the router's
    /// own freshly allocated address.
    #[instrument(skip_all, fields(deployer = %deployer, schema = ?config.schema))]
    pub fn deploy_with(
        ledger: &mut Ledger,
        deployer: Address,
        config: FeeRouterConfig,
        authority: A,
    ) -> Result<Self, FeeRouterError> {
        config.validate()?;
        let address = ledger.allocate_address(deployer);

        let domain = TypedDataDomain {
            name: config.domain_name,
            version: config.domain_version,
            chain_id: ledger.chain_id(),
            verifying_contract: address,
        };
        info!(%address, domain = %domain.name, "fee router deployed");

        Ok(Self {
            address,
            domain,
            validator: config.validator,
            owner: config.owner,
            schema: config.schema,
            proceeds: config.proceeds,
            price_table: config.price_table,
            premium: PremiumRegistry::new(),
            authority,
        })
    }

    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    #[must_use]
    pub fn schema(&self) -> SchemaVersion {
        self.schema
    }

    #[must_use]
    pub fn proceeds(&self) -> ProceedsRoute {
        self.proceeds
    }

    #[must_use]
    pub fn domain(&self) -> &TypedDataDomain {
        &self.domain
    }

    /// Native value currently held by the router.
    #[must_use]
    pub fn retained(&self, ledger: &Ledger) -> U256 {
        ledger.balance_of(&self.address)
    }

    /// Steps 1 to 5 of the pipeline: everything that does not move value.
    fn authorize(
        &self,
        ledger: &Ledger,
        caller: Address,
        submission: &Submission,
    ) -> Result<Hash, FeeRouterError> {
        if submission.schema() != self.schema {
            return Err(FeeRouterError::UnsupportedSchema);
        }

        let fields = submission.fields();
        if ledger.timestamp() > fields.deadline {
            return Err(FeeRouterError::DeadlineExpired);
        }
        if !is_valid_tier(self.schema, fields.tier) {
            return Err(FeeRouterError::InvalidTier);
        }

        let digest = self.authority.build_digest(&self.domain, fields);
        if !self
            .authority
            .expect_signer(&digest, submission.caller_signature().as_bytes(), caller)
        {
            return Err(FeeRouterError::InvalidSignature);
        }
        if let Some(validator_signature) = submission.validator_signature() {
            if !self
                .authority
                .expect_signer(&digest, validator_signature.as_bytes(), self.validator)
            {
                return Err(FeeRouterError::InvalidValidatorSignature);
            }
        }
        Ok(digest)
    }
}

impl<A: SignatureAuthorityApi + 'static> FeeRouterApi for FeeRouter<A> {
    #[instrument(skip_all, fields(
        caller = %call.caller,
        value = %call.value,
        tier = submission.fields().tier,
    ))]
    fn submit_message(
        &mut self,
        ledger: &mut Ledger,
        call: &Call,
        submission: &Submission,
    ) -> Result<SubmissionReceipt, FeeRouterError> {
        let result = transact(self, ledger, call, |router, ledger| {
            let digest = router.authorize(ledger, call.caller, submission)?;
            let tier = submission.fields().tier;

            let is_premium = router.premium.contains(&call.caller);
            let payment = required_payment(&router.price_table, tier, is_premium)?;
            check_payment(payment, call.value)?;
            debug!(?payment, "payment accepted");

            let here = router.address;
            let premium_granted = tier == PREMIUM_TIER
                && payment != Payment::Waived
                && router.premium.grant(call.caller);
            if premium_granted {
                ledger.emit(here, &PremiumGranted { account: call.caller })?;
            }

            if let ProceedsRoute::Forward(recipient) = router.proceeds {
                if !call.value.is_zero() {
                    ledger
                        .deliver(here, recipient, call.value, &mut *router)
                        .map_err(FeeRouterError::from_delivery)?;
                }
            }

            ledger.emit(
                here,
                &Signer {
                    caller: call.caller,
                    tier,
                    signature: submission.caller_signature().clone(),
                },
            )?;

            Ok(SubmissionReceipt {
                caller: call.caller,
                tier,
                digest,
                paid: call.value,
                premium_granted,
            })
        });

        match &result {
            Ok(receipt) => info!(
                paid = %receipt.paid,
                premium_granted = receipt.premium_granted,
                "submission accepted"
            ),
            Err(e) => warn!(reason = %e, "submission rejected"),
        }
        result
    }

    #[instrument(skip_all, fields(caller = %call.caller, to = %to))]
    fn withdraw_proceeds(
        &mut self,
        ledger: &mut Ledger,
        call: &Call,
        to: Address,
    ) -> Result<U256, FeeRouterError> {
        transact(self, ledger, call, |router, ledger| {
            if call.caller != router.owner {
                return Err(FeeRouterError::NotOwner);
            }

            let here = router.address;
            let amount = ledger.balance_of(&here);
            if !amount.is_zero() {
                ledger
                    .deliver(here, to, amount, &mut *router)
                    .map_err(FeeRouterError::from_delivery)?;
            }
            ledger.emit(here, &ProceedsWithdrawn { to, amount })?;
            info!(%amount, "proceeds withdrawn");
            Ok(amount)
        })
    }

    fn is_premium(&self, account: &Address) -> bool {
        self.premium.contains(account)
    }

    fn price_for(&self, tier: u64) -> Option<U256> {
        self.price_table.price_for(tier)
    }

    fn domain_separator(&self) -> Hash {
        domain_separator(&self.domain)
    }

    fn submission_digest(&self, fields: &SubmissionFields) -> Hash {
        self.authority.build_digest(&self.domain, fields)
    }

    fn chain_id(&self) -> u64 {
        self.domain.chain_id
    }

    fn validator(&self) -> Address {
        self.validator
    }

    fn owner(&self) -> Address {
        self.owner
    }
}

// =============================================================================
// TESTS
// =============================================================================
