use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wallet_balances::{process, BalanceCache, PriceTable, WalletBalance};

const CHAINS: &[&str] = &["Osmosis", "Ethereum", "Arbitrum", "Zilliqa", "Neo", "Solana"];
const CURRENCIES: &[&str] = &["ATOM", "BTC", "ETH", "OSMO", "USDC", "ZIL", "NEO", "ARB"];

fn wallet(rng: &mut StdRng, len: usize) -> Vec<WalletBalance> {
    (0..len)
        .map(|_| {
            WalletBalance::new(
                CURRENCIES[rng.random_range(0..CURRENCIES.len())],
                rng.random_range(-10.0..1_000.0),
                CHAINS[rng.random_range(0..CHAINS.len())],
            )
        })
        .collect()
}

fn prices(rng: &mut StdRng) -> PriceTable {
    CURRENCIES
        .iter()
        .map(|c| (c.to_string(), rng.random_range(0.01..50_000.0)))
        .collect()
}

fn bench_process(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBA1A);
    let prices = prices(&mut rng);

    let mut group = c.benchmark_group("process");
    for len in [10usize, 100, 1_000] {
        let balances = wallet(&mut rng, len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("uncached", len), &balances, |b, balances| {
            b.iter(|| process(black_box(balances), black_box(&prices)))
        });

        group.bench_with_input(BenchmarkId::new("cached", len), &balances, |b, balances| {
            let mut cache = BalanceCache::new();
            b.iter(|| cache.get(black_box(balances), black_box(&prices)).len())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_process);
criterion_main!(benches);
