//! # Replay
//!
//! Submissions carry no nonce. Replays on the same router are allowed and
//! priced like any other submission; replays anywhere else must fail the
//! signature check because the digest binds the chain id and the router.

#[cfg(test)]
mod tests {
    use crate::fixtures::{ether, Board};
    use shared_types::U256;
    use w3_01_signature_authority::signer::OffLedgerSigner;
    use w3_01_signature_authority::SignatureAuthority;
    use w3_02_host_ledger::{Call, Ledger, LedgerConfig};
    use w3_03_share_market::{ShareMarket, ShareMarketConfig};
    use w3_04_fee_router::{FeeRouter, FeeRouterApi, FeeRouterConfig, FeeRouterError};

    #[test]
    fn test_premium_replay_is_free_and_idempotent() {
        let mut board = Board::standard();
        let user = board.user("1");
        let submission = board.sign(&user, board.fields("premium", 3));

        board.submit(&user, &submission, ether("0.03")).unwrap();
        let treasury = board.market.treasury(&board.ledger);

        for _ in 0..5 {
            let receipt = board.submit(&user, &submission, U256::zero()).unwrap();
            assert_eq!(receipt.paid, U256::zero());
        }
        assert_eq!(board.market.treasury(&board.ledger), treasury);
        assert_eq!(board.ledger.balance_of(&user.address()), ether("0.97"));
    }

    #[test]
    fn test_standard_replay_pays_every_time() {
        let mut board = Board::standard();
        let user = board.user("1");
        let submission = board.sign(&user, board.fields("again", 2));

        for _ in 0..3 {
            board.submit(&user, &submission, ether("0.003")).unwrap();
        }
        assert_eq!(
            board.submit(&user, &submission, U256::zero()),
            Err(FeeRouterError::IncorrectPrice)
        );
        assert_eq!(board.market.treasury(&board.ledger), ether("0.009"));
    }

    #[test]
    fn test_replay_on_second_router_fails() {
        let mut board = Board::standard();
        let user = board.user("1");
        let submission = board.sign(&user, board.fields("elsewhere", 2));

        let mut twin = FeeRouter::deploy(
            &mut board.ledger,
            board.owner,
            FeeRouterConfig::dual(board.validator.address(), board.owner, board.market.address()),
        )
        .unwrap();
        assert_ne!(twin.address(), board.router.address());

        let call = Call::new(user.address(), ether("0.003"));
        assert_eq!(
            twin.submit_message(&mut board.ledger, &call, &submission),
            Err(FeeRouterError::InvalidSignature)
        );
    }

    #[test]
    fn test_replay_on_other_chain_fails() {
        let board = Board::standard();
        let user = OffLedgerSigner::random();
        let submission = board.sign(&user, board.fields("fork", 2));

        // Same deployer and nonce, so the router address matches; only the chain differs
        let mut fork = Ledger::new(LedgerConfig::default().with_chain_id(1)).unwrap();
        fork.fund(user.address(), ether("1")).unwrap();
        let market = ShareMarket::deploy(
            &mut fork,
            board.owner,
            ShareMarketConfig::for_owner(board.owner),
        )
        .unwrap();
        let mut router: FeeRouter<SignatureAuthority> = FeeRouter::deploy(
            &mut fork,
            board.owner,
            FeeRouterConfig::dual(board.validator.address(), board.owner, market.address()),
        )
        .unwrap();
        assert_eq!(router.address(), board.router.address());
        assert_ne!(router.chain_id(), board.router.chain_id());

        let call = Call::new(user.address(), ether("0.003"));
        assert_eq!(
            router.submit_message(&mut fork, &call, &submission),
            Err(FeeRouterError::InvalidSignature)
        );
    }
}
