//! # Reentrancy
//!
//! A seller whose receiver code calls back into the market while its payout
//! is being delivered. The nested call must be refused outright and the
//! outer sale must pay exactly once.

#[cfg(test)]
mod tests {
    use crate::fixtures::{ether, shares, Board, ReentrantSeller, Reentry};
    use shared_types::{mul_div, Address, U256, WAD};
    use std::any::Any;
    use w3_02_host_ledger::{Call, Delivery, Ledger, ReceiveResult, Receiver};
    use w3_03_share_market::{ShareMarket, ShareMarketApi, ShareMarketError, ShareTokenApi};

    /// Board where `attacker` bought 10,000 shares before vesting and the
    /// market is vested with fees in the treasury.
    fn vested_board_with_attacker() -> (Board, Address) {
        let mut board = Board::standard();
        let attacker = board.user("20").address();
        let poster = board.user("1");

        board.buy(attacker, shares(10_000)).unwrap();
        board.post(&poster, 3).unwrap();
        board.vest();
        (board, attacker)
    }

    #[test]
    fn test_reentrant_sell_is_refused() {
        let (mut board, attacker) = vested_board_with_attacker();
        let seller = ReentrantSeller::new(attacker, Reentry::Sell(shares(5_000)));
        let observed = seller.observed();
        board.ledger.register_receiver(attacker, Box::new(seller));

        let treasury = board.market.treasury(&board.ledger);
        let price = board.market.current_share_value(&board.ledger).unwrap();
        let balance = board.ledger.balance_of(&attacker);

        let payout = board.sell(attacker, shares(5_000)).unwrap();

        assert_eq!(payout, mul_div(shares(5_000), price, WAD).unwrap());
        assert_eq!(*observed.lock(), vec![Err(ShareMarketError::Reentrant)]);
        assert_eq!(board.ledger.balance_of(&attacker), balance + payout);
        assert_eq!(board.market.treasury(&board.ledger), treasury - payout);
        assert_eq!(board.market.balance_of(&attacker), shares(5_000));
        assert!(!board.market.is_busy());
        assert!(board.market.check_invariants().is_valid());
    }

    #[test]
    fn test_reentrant_buy_is_refused() {
        let (mut board, attacker) = vested_board_with_attacker();
        let value = board.market.price_per_share(&board.ledger).unwrap();
        let seller = ReentrantSeller::new(
            attacker,
            Reentry::Buy {
                amount: shares(1),
                value,
            },
        );
        let observed = seller.observed();
        board.ledger.register_receiver(attacker, Box::new(seller));

        board.sell(attacker, shares(1_000)).unwrap();

        assert_eq!(
            observed.lock().first().cloned(),
            Some(Err(ShareMarketError::Reentrant))
        );
        assert_eq!(board.market.balance_of(&attacker), shares(9_000));
        assert_eq!(board.market.available_shares().reserved_for_resale, shares(1_000));
    }

    #[test]
    fn test_guard_released_after_reentry() {
        let (mut board, attacker) = vested_board_with_attacker();
        board.ledger.register_receiver(
            attacker,
            Box::new(ReentrantSeller::new(attacker, Reentry::Sell(shares(1)))),
        );

        board.sell(attacker, shares(100)).unwrap();
        board.sell(attacker, shares(100)).unwrap();

        assert_eq!(board.market.balance_of(&attacker), shares(9_800));
    }

    /// Re-enters, then rejects the payout to unwind the outer sale.
    struct ReenterThenReject {
        account: Address,
    }

    impl Receiver for ReenterThenReject {
        fn on_receive(
            &mut self,
            _: &Delivery,
            ledger: &mut Ledger,
            origin: &mut dyn Any,
        ) -> ReceiveResult {
            if let Some(market) = origin.downcast_mut::<ShareMarket>() {
                let _ = market.sell_shares(ledger, &Call::unpaid(self.account), shares(1));
            }
            Err("unwind".to_string())
        }
    }

    #[test]
    fn test_failed_outer_sale_releases_guard_and_state() {
        let (mut board, attacker) = vested_board_with_attacker();
        board
            .ledger
            .register_receiver(attacker, Box::new(ReenterThenReject { account: attacker }));
        let treasury = board.market.treasury(&board.ledger);

        let err = board.sell(attacker, shares(100)).unwrap_err();

        assert_eq!(err, ShareMarketError::TransferFailed);
        assert!(!board.market.is_busy());
        assert_eq!(board.market.balance_of(&attacker), shares(10_000));
        assert_eq!(board.market.treasury(&board.ledger), treasury);
        assert_eq!(board.market.available_shares().reserved_for_resale, U256::zero());

        // An ordinary seller is unaffected
        let owner = board.owner;
        assert!(board.sell(owner, shares(1)).is_ok());
    }
}
