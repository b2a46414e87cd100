//! # Rejecting Recipient
//!
//! A recipient whose receiver code refuses every incoming value. Each
//! component must fail the whole call with `Failed to send Ether` and leave
//! no partial effect behind.

#[cfg(test)]
mod tests {
    use crate::fixtures::{ether, shares, Board, RejectingRecipient};
    use shared_types::{FailureKind, U256};
    use w3_03_share_market::{
        BuyProceeds, ShareMarketApi, ShareMarketConfig, ShareMarketError, ShareTokenApi,
    };
    use w3_04_fee_router::FeeRouterApi;

    #[test]
    fn test_router_forwarding_to_rejecting_market() {
        let mut board = Board::standard();
        let user = board.user("1");
        let market = board.market.address();
        board
            .ledger
            .register_receiver(market, Box::new(RejectingRecipient));
        let logs_before = board.ledger.logs().len();

        for tier in [2, 3] {
            let err = board.post(&user, tier).unwrap_err();
            assert_eq!(err.to_string(), "Failed to send Ether");
            assert_eq!(err.kind(), FailureKind::Transfer);
        }

        assert_eq!(board.ledger.balance_of(&user.address()), ether("1"));
        assert_eq!(board.market.treasury(&board.ledger), U256::zero());
        assert!(!board.router.is_premium(&user.address()));
        assert_eq!(board.ledger.logs().len(), logs_before);
    }

    #[test]
    fn test_sell_to_rejecting_seller() {
        let mut board = Board::standard();
        let seller = board.user("1").address();
        let poster = board.user("1");
        board.buy(seller, shares(100)).unwrap();
        board.post(&poster, 2).unwrap();
        board.vest();
        board
            .ledger
            .register_receiver(seller, Box::new(RejectingRecipient));
        let treasury = board.market.treasury(&board.ledger);

        let err = board.sell(seller, shares(100)).unwrap_err();

        assert_eq!(err, ShareMarketError::TransferFailed);
        assert_eq!(board.market.balance_of(&seller), shares(100));
        assert_eq!(board.market.treasury(&board.ledger), treasury);
        assert_eq!(board.market.available_shares().reserved_for_resale, U256::zero());
    }

    #[test]
    fn test_buy_with_rejecting_owner_proceeds() {
        let mut board =
            Board::with_market(ShareMarketConfig::default().with_buy_proceeds(BuyProceeds::Owner));
        let buyer = board.user("1").address();
        let owner = board.owner;
        board
            .ledger
            .register_receiver(owner, Box::new(RejectingRecipient));
        let supply = board.market.total_supply();

        let err = board.buy(buyer, shares(10)).unwrap_err();

        assert_eq!(err.to_string(), "Failed to send Ether");
        assert_eq!(board.market.total_supply(), supply);
        assert_eq!(board.market.balance_of(&buyer), U256::zero());
        assert_eq!(board.ledger.balance_of(&buyer), ether("1"));
    }

    #[test]
    fn test_buy_proceeds_reach_accepting_owner() {
        let mut board =
            Board::with_market(ShareMarketConfig::default().with_buy_proceeds(BuyProceeds::Owner));
        let buyer = board.user("1").address();

        let paid = board.buy(buyer, shares(10)).unwrap();

        assert_eq!(board.ledger.balance_of(&board.owner), paid);
        assert_eq!(board.market.treasury(&board.ledger), U256::zero());
        assert_eq!(board.market.balance_of(&buyer), shares(10));
    }
}
