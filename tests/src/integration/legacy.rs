//! # Legacy Board
//!
//! Single-signature, single-tier router that retains fees for its owner.

#[cfg(test)]
mod tests {
    use crate::fixtures::{ether, init_tracing, RejectingRecipient, SUBMISSION_TTL};
    use shared_types::{Address, U256};
    use w3_01_signature_authority::signer::OffLedgerSigner;
    use w3_01_signature_authority::SubmissionFields;
    use w3_02_host_ledger::{Call, Ledger};
    use w3_04_fee_router::{
        FeeRouter, FeeRouterApi, FeeRouterConfig, FeeRouterError, ProceedsWithdrawn, Submission,
        LEGACY_TIER,
    };

    struct LegacyBoard {
        ledger: Ledger,
        router: FeeRouter,
        owner: Address,
        author: OffLedgerSigner,
    }

    fn legacy_board() -> LegacyBoard {
        init_tracing();
        let mut ledger = Ledger::default();
        let owner = Address::from_low_u64_be(0x0DD);
        let author = OffLedgerSigner::random();
        ledger.fund(author.address(), ether("1")).unwrap();
        let router = FeeRouter::deploy(&mut ledger, owner, FeeRouterConfig::legacy(owner)).unwrap();
        LegacyBoard {
            ledger,
            router,
            owner,
            author,
        }
    }

    impl LegacyBoard {
        fn fields(&self, tier: u64) -> SubmissionFields {
            SubmissionFields::new("old board", "0", "0", tier, self.ledger.timestamp() + SUBMISSION_TTL)
        }

        fn signed(&self, tier: u64) -> Submission {
            let fields = self.fields(tier);
            let signature = self
                .author
                .sign_submission(self.router.domain(), &fields)
                .unwrap();
            Submission::legacy(fields, signature)
        }

        fn submit(&mut self, submission: &Submission, value: U256) -> Result<(), FeeRouterError> {
            let call = Call::new(self.author.address(), value);
            self.router
                .submit_message(&mut self.ledger, &call, submission)
                .map(|_| ())
        }
    }

    #[test]
    fn test_legacy_submission_retains_fee() {
        let mut board = legacy_board();
        let submission = board.signed(LEGACY_TIER);

        board.submit(&submission, ether("0.003")).unwrap();
        board.submit(&submission, ether("0.003")).unwrap();

        assert_eq!(board.router.retained(&board.ledger), ether("0.006"));
    }

    #[test]
    fn test_legacy_rejects_other_tiers_and_schema() {
        let mut board = legacy_board();

        let tier_two = board.signed(2);
        assert_eq!(
            board.submit(&tier_two, ether("0.003")),
            Err(FeeRouterError::InvalidTier)
        );

        let fields = board.fields(LEGACY_TIER);
        let signature = board
            .author
            .sign_submission(board.router.domain(), &fields)
            .unwrap();
        let dual = Submission::dual(fields, signature.clone(), signature);
        assert_eq!(
            board.submit(&dual, ether("0.003")),
            Err(FeeRouterError::UnsupportedSchema)
        );
    }

    #[test]
    fn test_owner_withdraws_retained_fees() {
        let mut board = legacy_board();
        let submission = board.signed(LEGACY_TIER);
        board.submit(&submission, ether("0.003")).unwrap();

        let intruder = board.author.address();
        let err = board
            .router
            .withdraw_proceeds(&mut board.ledger, &Call::unpaid(intruder), intruder)
            .unwrap_err();
        assert_eq!(err, FeeRouterError::NotOwner);

        let owner = board.owner;
        let amount = board
            .router
            .withdraw_proceeds(&mut board.ledger, &Call::unpaid(owner), owner)
            .unwrap();
        assert_eq!(amount, ether("0.003"));
        assert_eq!(board.ledger.balance_of(&owner), ether("0.003"));

        let withdrawn: Vec<ProceedsWithdrawn> =
            board.ledger.events_of(&board.router.address()).unwrap();
        assert_eq!(withdrawn.len(), 1);
        assert_eq!(withdrawn[0].to, owner);
    }

    #[test]
    fn test_withdraw_to_rejecting_recipient_keeps_fees() {
        let mut board = legacy_board();
        let submission = board.signed(LEGACY_TIER);
        board.submit(&submission, ether("0.003")).unwrap();

        let vault = Address::from_low_u64_be(0xFA11);
        board
            .ledger
            .register_receiver(vault, Box::new(RejectingRecipient));

        let owner = board.owner;
        let err = board
            .router
            .withdraw_proceeds(&mut board.ledger, &Call::unpaid(owner), vault)
            .unwrap_err();
        assert_eq!(err, FeeRouterError::TransferFailed);
        assert_eq!(board.router.retained(&board.ledger), ether("0.003"));
    }
}
