use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use hexlife::{Automaton, Board, Topology};

fn make_board(size: usize) -> Board {
    let mut board = Board::new(size, size);
    for row in 0..size {
        for col in 0..size {
            if (row + col) % 3 == 0 {
                board.set(row, col, true);
            }
        }
    }
    board
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for topology in Topology::ALL {
        for size in [64, 128, 256] {
            let board = make_board(size);
            let id = BenchmarkId::new(format!("{topology:?}"), size);

            group.bench_with_input(id, &board, |b, board| {
                b.iter_batched(
                    || Automaton::new(board.clone(), topology),
                    |mut automaton| automaton.step(),
                    BatchSize::LargeInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
