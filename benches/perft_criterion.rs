use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use casual_chess::game_state::board::Board;
use casual_chess::game_state::chess_types::Color;
use casual_chess::move_generation::perft::perft;

/// Start-position node counts that are known exactly. Deeper plies are
/// benchmarked without a guard because king capture ends lines early.
const STARTPOS_EXPECTED: &[u64] = &[20, 400, 8902];

fn selected_depth() -> u8 {
    match std::env::var("CASUAL_CHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => 4,
        _ => 3,
    }
}

fn bench_perft(c: &mut Criterion) {
    let max_depth = selected_depth();
    let suite_name = if max_depth > 3 { "standard" } else { "quick" };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    let board = Board::starting_position();
    for depth in 1..=max_depth {
        let warmup = perft(&board, Color::White, depth);
        if let Some(expected) = STARTPOS_EXPECTED.get(usize::from(depth) - 1) {
            assert_eq!(warmup.nodes, *expected, "node mismatch at depth {depth}");
        }

        group.throughput(Throughput::Elements(warmup.nodes));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("startpos_d{depth}")),
            &warmup.nodes,
            |b, expected| {
                b.iter(|| {
                    let count = perft(black_box(&board), Color::White, black_box(depth));
                    assert_eq!(count.nodes, *expected);
                    black_box(count.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
