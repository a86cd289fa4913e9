//! # IBC Connection Benchmarks
//!
//! | Operation | Cost driver |
//! |-----------|-------------|
//! | Commit verification | One Ed25519 verify per listed signer |
//! | Validator transition | Signer collection over two sets |
//! | Full update | Verification plus typed store writes |
//! | Checkpoint hashing | Canonical byte layout + SHA-256 |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ibc_connection::{
    CommitVerifier, ConnectionApi, ConnectionConfig, MockExecutionContext, QuorumVerifier,
};
use ibc_tests::fixtures::{
    handler, open_msg, remote_a, signed_checkpoint, unanimous_checkpoint, update_msg, Validators,
};
use std::time::Duration;

const SET_SIZES: [u8; 4] = [4, 16, 64, 128];

fn seeds(count: u8, offset: u8) -> Vec<u8> {
    (0..count).map(|i| i.wrapping_add(offset)).collect()
}

fn bench_same_validator_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify-same-validators");
    group.measurement_time(Duration::from_secs(5));
    let verifier = QuorumVerifier::from_config(&ConnectionConfig::default());
    let chain = remote_a();

    for size in SET_SIZES {
        let vals = Validators::from_seeds(&seeds(size, 1));
        let trusted = unanimous_checkpoint(&chain, 100, &vals);
        let candidate = unanimous_checkpoint(&chain, 101, &vals);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("unanimous", size),
            &(trusted, candidate),
            |b, (trusted, candidate)| {
                b.iter(|| black_box(verifier.verify(trusted, candidate).is_ok()))
            },
        );
    }

    group.finish();
}

fn bench_transition_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify-validator-transition");
    group.measurement_time(Duration::from_secs(5));
    let verifier = QuorumVerifier::from_config(&ConnectionConfig::default());
    let chain = remote_a();

    for size in SET_SIZES {
        let old = Validators::from_seeds(&seeds(size, 1));
        // three quarters carry over, the rest rotate out
        let keep = size - size / 4;
        let mut next_seeds = seeds(keep, 1);
        next_seeds.extend(seeds(size - keep, 200));
        let new = Validators::from_seeds(&next_seeds);

        let trusted = unanimous_checkpoint(&chain, 100, &old);
        let candidate = signed_checkpoint(&chain, 500, &new, &new, &new.all());

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("skip", size),
            &(trusted, candidate),
            |b, (trusted, candidate)| {
                b.iter(|| black_box(verifier.verify(trusted, candidate).is_ok()))
            },
        );
    }

    group.finish();
}

fn bench_handler_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("handler-update");
    let handler = handler();
    let chain = remote_a();
    let vals = Validators::from_seeds(&seeds(16, 1));

    let mut opened = MockExecutionContext::new();
    handler.handle(&mut opened, &open_msg(unanimous_checkpoint(&chain, 100, &vals)));
    let update = update_msg(unanimous_checkpoint(&chain, 101, &vals));

    group.bench_function("update_16_validators", |b| {
        b.iter_batched(
            || opened.clone(),
            |mut ctx| black_box(handler.handle(&mut ctx, &update).is_ok()),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_checkpoint_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkpoint-hashing");
    let chain = remote_a();

    for size in SET_SIZES {
        let vals = Validators::from_seeds(&seeds(size, 1));
        let checkpoint = unanimous_checkpoint(&chain, 100, &vals);

        group.bench_with_input(BenchmarkId::new("validator_set_hash", size), &checkpoint, |b, cp| {
            b.iter(|| black_box(cp.validators.hash()))
        });
        group.bench_with_input(BenchmarkId::new("sign_bytes", size), &checkpoint, |b, cp| {
            b.iter(|| black_box(cp.sign_bytes()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_same_validator_verification,
    bench_transition_verification,
    bench_handler_update,
    bench_checkpoint_hashing,
);

criterion_main!(benches);
