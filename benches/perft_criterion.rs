use std::sync::Arc;
use std::time::Duration;

use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

use mailbox_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use mailbox_chess::move_generation::move_generator::MoveGenerator;
use mailbox_chess::move_generation::perft::{
    perft, perft_divide, perft_multi_threaded, perft_nodes, PerftCounts,
};

const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ENDGAME_PINS_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const PROMOTION_TRAPS_FEN: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

/// Position plus reference node counts, indexed by depth - 1.
struct Reference {
    name: &'static str,
    fen: &'static str,
    nodes: &'static [usize],
}

const REFERENCES: &[Reference] = &[
    Reference {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        nodes: &[20, 400, 8_902, 197_281],
    },
    Reference {
        name: "kiwipete",
        fen: KIWIPETE_FEN,
        nodes: &[48, 2_039, 97_862],
    },
    Reference {
        name: "endgame_pins",
        fen: ENDGAME_PINS_FEN,
        nodes: &[14, 191, 2_812, 43_238],
    },
    Reference {
        name: "promotion_traps",
        fen: PROMOTION_TRAPS_FEN,
        nodes: &[44, 1_486, 62_379],
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Suite {
    Quick,
    Standard,
}

impl Suite {
    fn from_env() -> Self {
        match std::env::var("MAILBOX_BENCH_SUITE") {
            Ok(value) if value.eq_ignore_ascii_case("standard") => Suite::Standard,
            _ => Suite::Quick,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Suite::Quick => "quick",
            Suite::Standard => "standard",
        }
    }

    /// Deepest depth benchmarked for a reference with `available` known counts.
    fn max_depth(self, available: usize) -> usize {
        match self {
            Suite::Quick => available.min(3),
            Suite::Standard => available,
        }
    }
}

fn configure(group: &mut BenchmarkGroup<'_, WallTime>) {
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);
}

fn load(reference: &Reference) -> GameState {
    GameState::from_fen(reference.fen).expect("reference FEN should parse")
}

/// Bulk-counted node totals across every reference position.
fn bench_node_counts(c: &mut Criterion) {
    let suite = Suite::from_env();
    let mut group = c.benchmark_group(format!("perft_nodes_{}", suite.label()));
    configure(&mut group);

    let generator = LegalMoveGenerator;

    for reference in REFERENCES {
        let mut game = load(reference);

        for depth in 1..=suite.max_depth(reference.nodes.len()) {
            let expected = reference.nodes[depth - 1];
            let depth = depth as u8;

            // Correctness guard before timing.
            assert_eq!(
                perft_nodes(&generator, &mut game, depth).expect("perft should run"),
                expected,
                "node mismatch for {} depth {depth}",
                reference.name
            );

            group.throughput(Throughput::Elements(expected as u64));
            group.bench_with_input(
                BenchmarkId::new(reference.name, depth),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        perft_nodes(&generator, black_box(&mut game), black_box(depth))
                            .expect("perft benchmark run should succeed")
                    });
                },
            );
        }
    }

    group.finish();
}

/// Leaf classification on one thread against one worker per root move.
fn bench_classified_threading(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_classified");
    configure(&mut group);

    let generator = LegalMoveGenerator;
    let shared: Arc<dyn MoveGenerator> = Arc::new(LegalMoveGenerator);
    let depth = 3u8;

    for reference in &REFERENCES[..2] {
        let mut game = load(reference);
        let single = perft(&generator, &mut game, depth).expect("perft should run");
        let threaded =
            perft_multi_threaded(Arc::clone(&shared), &game, depth).expect("perft should run");
        assert_eq!(single, threaded, "thread split changed counts for {}", reference.name);
        assert_eq!(single.nodes, reference.nodes[usize::from(depth) - 1]);

        group.throughput(Throughput::Elements(single.nodes as u64));
        group.bench_function(BenchmarkId::new("single", reference.name), |b| {
            b.iter(|| -> PerftCounts {
                perft(&generator, black_box(&mut game), depth).expect("perft should run")
            });
        });
        group.bench_function(BenchmarkId::new("threaded", reference.name), |b| {
            b.iter(|| -> PerftCounts {
                perft_multi_threaded(Arc::clone(&shared), black_box(&game), depth)
                    .expect("perft should run")
            });
        });
    }

    group.finish();
}

/// Per-root-move split as used when hunting a generator bug.
fn bench_divide(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_divide");
    configure(&mut group);

    let generator = LegalMoveGenerator;
    let mut game = GameState::from_fen(KIWIPETE_FEN).expect("kiwipete FEN should parse");
    let divided = perft_divide(&generator, &mut game, 2).expect("divide should run");
    assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<usize>(), 2_039);

    group.bench_function("kiwipete_d2", |b| {
        b.iter(|| perft_divide(&generator, black_box(&mut game), 2).expect("divide should run"));
    });

    group.finish();
}

criterion_group!(perft_benches, bench_node_counts, bench_classified_threading, bench_divide);
criterion_main!(perft_benches);
