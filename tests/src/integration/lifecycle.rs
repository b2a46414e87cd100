//! # Board Lifecycle
//!
//! Fees accrue from submissions, early buyers pay the fixed price, and after
//! vesting shares redeem against the accrued treasury and are reissued from
//! the pool.

#[cfg(test)]
mod tests {
    use crate::fixtures::{ether, shares, Board};
    use shared_types::{mul_div, U256, WAD};
    use w3_02_host_ledger::Call;
    use w3_03_share_market::{
        ShareMarketApi, ShareTokenApi, SharesPurchased, SharesRedeemed, Transfer,
    };
    use tracing::info;
    use w3_04_fee_router::{FeeRouterApi, PremiumGranted, Signer};

    #[test]
    fn test_fees_accrue_then_redeem_after_vesting() {
        let mut board = Board::standard();
        let alice = board.user("1");
        let bob = board.user("1");
        let carol = board.user("10");
        let dave = board.user("10");

        // Fees
        board.post(&alice, 2).unwrap();
        board.post(&alice, 2).unwrap();
        let receipt = board.post(&bob, 3).unwrap();
        assert!(receipt.premium_granted);
        let free = board.post(&bob, 3).unwrap();
        assert_eq!(free.paid, U256::zero());
        assert_eq!(board.market.treasury(&board.ledger), ether("0.036"));

        info!(treasury = %board.market.treasury(&board.ledger), "fees collected");

        // Early buyer at the fixed price
        let paid = board.buy(carol.address(), shares(1000)).unwrap();
        assert_eq!(paid, ether("0.6"));
        assert_eq!(board.market.treasury(&board.ledger), ether("0.636"));
        let supply = board.market.total_supply();
        assert_eq!(supply, shares(1_501_000));

        // Redemption at treasury value
        board.vest();
        info!(height = board.ledger.height(), %supply, "vested");
        let price = board.market.current_share_value(&board.ledger).unwrap();
        assert_eq!(price, mul_div(ether("0.636"), WAD, supply).unwrap());
        assert!(price < ether("0.0006"));

        let payout = board.sell(carol.address(), shares(1000)).unwrap();
        assert_eq!(payout, mul_div(shares(1000), price, WAD).unwrap());
        assert_eq!(
            board.ledger.balance_of(&carol.address()),
            ether("10") - ether("0.6") + payout
        );
        assert_eq!(board.market.treasury(&board.ledger), ether("0.636") - payout);
        assert_eq!(board.market.available_shares().reserved_for_resale, shares(1000));
        assert_eq!(board.market.total_supply(), supply);

        info!(%payout, "early buyer redeemed");

        // Reissue from the pool at the new value
        let price = board.market.price_per_share(&board.ledger).unwrap();
        let value = mul_div(shares(400), price, WAD).unwrap();
        let allocation = board
            .market
            .buy_shares(&mut board.ledger, &Call::new(dave.address(), value), shares(400))
            .unwrap();
        assert_eq!(allocation.from_reserve, shares(400));
        assert_eq!(allocation.minted, U256::zero());
        assert_eq!(board.market.balance_of(&dave.address()), shares(400));
        assert_eq!(board.market.available_shares().reserved_for_resale, shares(600));

        assert!(board.market.check_invariants().is_valid());

        // Event trail
        let router = board.router.address();
        let market = board.market.address();
        let signers: Vec<Signer> = board.ledger.events_of(&router).unwrap();
        assert_eq!(signers.len(), 4);
        assert_eq!(signers[2].caller, bob.address());
        assert_eq!(signers[2].tier, 3);
        let premium: Vec<PremiumGranted> = board.ledger.events_of(&router).unwrap();
        assert_eq!(premium.len(), 1);

        let purchases: Vec<SharesPurchased> = board.ledger.events_of(&market).unwrap();
        assert_eq!(purchases.len(), 2);
        let redemptions: Vec<SharesRedeemed> = board.ledger.events_of(&market).unwrap();
        assert_eq!(redemptions.len(), 1);
        assert_eq!(redemptions[0].payout, payout);

        let transfers: Vec<Transfer> = board.ledger.events_of(&market).unwrap();
        // private sale, carol mint, carol -> pool, pool -> dave
        assert_eq!(transfers.len(), 4);
        assert_eq!(transfers[2].to, market);
        assert_eq!(transfers[3].from, market);
    }

    #[test]
    fn test_direct_funding_raises_share_value() {
        let mut board = Board::standard();
        let patron = board.user("5");
        board.vest();

        let before = board.market.current_share_value(&board.ledger).unwrap();
        assert_eq!(before, U256::zero());

        board
            .ledger
            .transfer(patron.address(), board.market.address(), ether("3"))
            .unwrap();

        // 3 ether over 1,500,000 shares
        assert_eq!(
            board.market.current_share_value(&board.ledger).unwrap(),
            U256::from(2_000_000_000_000u64)
        );
    }

    #[test]
    fn test_owner_redeems_private_sale() {
        let mut board = Board::standard();
        let user = board.user("1");
        board.post(&user, 3).unwrap();
        board.vest();

        let owner = board.owner;
        let payout = board.sell(owner, shares(1_500_000)).unwrap();

        // Floor truncation only
        assert!(payout <= ether("0.03"));
        assert!(ether("0.03") - payout < U256::from(1_000_000u64));
        assert_eq!(board.market.balance_of(&owner), U256::zero());
    }
}
