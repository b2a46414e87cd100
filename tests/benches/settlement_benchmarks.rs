//! # W3-Board Settlement Benchmarks
//!
//! | Subsystem | Operation | Target |
//! |-----------|-----------|--------|
//! | W3-01 Signature Authority | Typed-data digest | < 50us |
//! | W3-01 Signature Authority | ecrecover | < 1ms |
//! | W3-04 Fee Router | Dual-signed submission | < 5ms |
//! | W3-03 Share Market | Buy + sell cycle | < 1ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_types::{parse_ether, Address, U256, WAD};
use std::time::Duration;
use w3_01_signature_authority::signer::OffLedgerSigner;
use w3_01_signature_authority::{
    build_digest, SignatureAuthority, SignatureAuthorityApi, SubmissionFields, TypedDataDomain,
};
use w3_02_host_ledger::{Call, Ledger};
use w3_03_share_market::{ShareMarket, ShareMarketApi, ShareMarketConfig};
use w3_04_fee_router::{FeeRouter, FeeRouterApi, FeeRouterConfig, Submission};

fn ether(s: &str) -> U256 {
    parse_ether(s).expect("valid ether literal")
}

fn domain() -> TypedDataDomain {
    TypedDataDomain {
        name: "idecentralize".to_string(),
        version: "1".to_string(),
        chain_id: 31337,
        verifying_contract: Address::from_low_u64_be(0xC0DE),
    }
}

// ============================================================================
// W3-01: Signature Authority
// ============================================================================

fn bench_signature_authority(c: &mut Criterion) {
    let mut group = c.benchmark_group("w3-01-signature-authority");
    group.measurement_time(Duration::from_secs(10));

    let domain = domain();
    let signer = OffLedgerSigner::random();
    let authority = SignatureAuthority::new();

    for len in [16usize, 280, 4096] {
        let fields = SubmissionFields::new("x".repeat(len), "45.5", "-73.5", 2, 1_800_000_000);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("build_digest", len), &fields, |b, fields| {
            b.iter(|| black_box(build_digest(&domain, fields)))
        });
    }

    let fields = SubmissionFields::new("gm", "45.5", "-73.5", 2, 1_800_000_000);
    let digest = build_digest(&domain, &fields);
    let signature = signer.sign_submission(&domain, &fields).expect("signs");

    group.bench_function("recover", |b| {
        b.iter(|| black_box(authority.recover(&digest, signature.as_bytes())))
    });

    let mut tampered = signature.as_bytes().to_vec();
    tampered[64] = 99;
    group.bench_function("recover_rejects_bad_v", |b| {
        b.iter(|| black_box(authority.recover(&digest, &tampered)))
    });

    group.finish();
}

// ============================================================================
// W3-04: Fee Router
// ============================================================================

fn bench_fee_router(c: &mut Criterion) {
    let mut group = c.benchmark_group("w3-04-fee-router");

    let mut ledger = Ledger::default();
    let owner = Address::from_low_u64_be(1);
    let validator = OffLedgerSigner::random();
    let user = OffLedgerSigner::random();
    ledger
        .fund(user.address(), ether("1000000"))
        .expect("funding");

    let market = ShareMarket::deploy(&mut ledger, owner, ShareMarketConfig::for_owner(owner))
        .expect("market deploys");
    let mut router = FeeRouter::deploy(
        &mut ledger,
        owner,
        FeeRouterConfig::dual(validator.address(), owner, market.address()),
    )
    .expect("router deploys");

    let fields = SubmissionFields::new("gm", "45.5", "-73.5", 2, u64::MAX);
    let submission = Submission::dual(
        fields.clone(),
        user.sign_submission(router.domain(), &fields).expect("signs"),
        validator.sign_submission(router.domain(), &fields).expect("signs"),
    );
    let call = Call::new(user.address(), ether("0.003"));

    group.bench_function("submit_message_tier_2", |b| {
        b.iter(|| {
            router
                .submit_message(&mut ledger, &call, black_box(&submission))
                .expect("accepted")
        })
    });

    group.finish();
}

// ============================================================================
// W3-03: Share Market
// ============================================================================

fn bench_share_market(c: &mut Criterion) {
    let mut group = c.benchmark_group("w3-03-share-market");

    let mut ledger = Ledger::default();
    let owner = Address::from_low_u64_be(1);
    let trader = Address::from_low_u64_be(2);
    ledger.fund(trader, ether("1000000")).expect("funding");

    let mut market = ShareMarket::deploy(
        &mut ledger,
        owner,
        ShareMarketConfig::for_owner(owner).with_vesting_period(0),
    )
    .expect("market deploys");
    ledger
        .transfer(trader, market.address(), ether("100"))
        .expect("donation");

    let amount = WAD * U256::from(10u64);
    group.bench_function("buy_sell_cycle", |b| {
        b.iter(|| {
            let price = market.price_per_share(&ledger).expect("priced");
            let value = amount * price / WAD;
            market
                .buy_shares(&mut ledger, &Call::new(trader, value), amount)
                .expect("bought");
            market
                .sell_shares(&mut ledger, &Call::unpaid(trader), amount)
                .expect("sold")
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_signature_authority,
    bench_fee_router,
    bench_share_market
);
criterion_main!(benches);
