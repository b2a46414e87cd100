//! # Board Acceptance Flows
//!
//! End-to-end acceptance flows, run against a fully deployed board.

#[cfg(test)]
mod tests {
    use crate::fixtures::{ether, shares, Board};
    use shared_types::{FailureKind, U256};
    use w3_02_host_ledger::Call;
    use w3_03_share_market::{
        Availability, ShareMarketApi, ShareMarketConfig, ShareTokenApi,
    };
    use w3_04_fee_router::{FeeRouterApi, FeeRouterError, Submission};

    fn small_board() -> Board {
        Board::with_market(
            ShareMarketConfig::default()
                .with_max_supply(shares(500))
                .with_private_sale(shares(150)),
        )
    }

    // =========================================================================
    // SHARE MARKET
    // =========================================================================

    #[test]
    fn test_private_sale_reduces_availability() {
        let board = small_board();

        assert_eq!(board.market.balance_of(&board.owner), shares(150));
        assert_eq!(
            board.market.available_shares(),
            Availability {
                reserved_for_resale: U256::zero(),
                publicly_mintable: shares(350),
            }
        );
    }

    #[test]
    fn test_buying_out_mintable_supply_leaves_none() {
        let mut board = small_board();
        let buyer = board.user("1");

        let paid = board.buy(buyer.address(), shares(350)).unwrap();
        assert_eq!(paid, ether("0.21"));
        assert_eq!(board.market.total_supply(), shares(500));

        let err = board.buy(buyer.address(), shares(1)).unwrap_err();
        assert_eq!(err.to_string(), "Amount exceeding available supply");
        assert_eq!(err.kind(), FailureKind::Capacity);
        assert_eq!(board.market.available_shares().publicly_mintable, U256::zero());
    }

    #[test]
    fn test_unpaid_buy_is_rejected() {
        let mut board = small_board();
        let buyer = board.user("1");

        for amount in [U256::one(), shares(1), shares(350)] {
            let err = board
                .market
                .buy_shares(&mut board.ledger, &Call::unpaid(buyer.address()), amount)
                .unwrap_err();
            assert_eq!(err.to_string(), "Invalid amount of ether");
        }
        assert_eq!(board.market.balance_of(&buyer.address()), U256::zero());
    }

    #[test]
    fn test_fees_without_supply_value_shares_at_zero() {
        let mut board = Board::with_market(ShareMarketConfig::default().with_private_sale(U256::zero()));
        let user = board.user("1");

        board.post(&user, 2).unwrap();

        assert_eq!(board.market.treasury(&board.ledger), ether("0.003"));
        assert_eq!(board.market.total_supply(), U256::zero());
        assert_eq!(board.market.current_share_value(&board.ledger), Ok(U256::zero()));
    }

    #[test]
    fn test_sell_before_vesting_is_rejected() {
        let mut board = small_board();
        let owner = board.owner;

        let err = board.sell(owner, shares(1)).unwrap_err();
        assert_eq!(err.to_string(), "Vesting period is not over");
        assert_eq!(board.market.balance_of(&owner), shares(150));
    }

    #[test]
    fn test_first_message_sets_share_value() {
        let mut board = Board::standard();
        let user = board.user("1");

        board.post(&user, 2).unwrap();

        // 0.003 ether over 1,500,000 shares
        assert_eq!(
            board.market.current_share_value(&board.ledger),
            Ok(U256::from(2_000_000_000u64))
        );
    }

    // =========================================================================
    // FEE ROUTER
    // =========================================================================

    #[test]
    fn test_submission_with_invalid_tier_rejected() {
        let mut board = Board::standard();
        let user = board.user("1");
        let submission = board.sign(&user, board.fields("tier zero", 0));

        let err = board.submit(&user, &submission, ether("0.003")).unwrap_err();
        assert_eq!(err.to_string(), "invalid tier");
    }

    #[test]
    fn test_submission_past_deadline_rejected() {
        let mut board = Board::standard();
        let user = board.user("1");
        let fields = board.fields("late", 2);
        let submission = board.sign(&user, fields);

        board.ledger.mine(100);

        let err = board.submit(&user, &submission, ether("0.003")).unwrap_err();
        assert_eq!(err.to_string(), "Passed the deadline");
    }

    #[test]
    fn test_caller_signature_reused_as_validator_rejected() {
        let mut board = Board::standard();
        let user = board.user("1");
        let fields = board.fields("forged", 2);
        let caller_signature = user.sign_submission(board.router.domain(), &fields).unwrap();
        let submission = Submission::dual(fields, caller_signature.clone(), caller_signature);

        let err = board.submit(&user, &submission, ether("0.003")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid validator signature");
        assert_eq!(board.market.treasury(&board.ledger), U256::zero());
    }

    #[test]
    fn test_incorrect_price_leaves_everything_untouched() {
        let mut board = Board::standard();
        let user = board.user("1");
        let submission = board.sign(&user, board.fields("cheap", 3));
        let logs_before = board.ledger.logs().len();

        let err = board.submit(&user, &submission, ether("0.003")).unwrap_err();
        assert_eq!(err, FeeRouterError::IncorrectPrice);
        assert_eq!(board.ledger.balance_of(&user.address()), ether("1"));
        assert_eq!(board.ledger.logs().len(), logs_before);
        assert!(!board.router.is_premium(&user.address()));
    }
}
