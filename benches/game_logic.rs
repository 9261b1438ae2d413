use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_bomber::core::{detonate, Board, Bomb, Explosion, GameState, SimpleRng};
use tui_bomber::types::{Position, GRID_COLS, GRID_ROWS, TICK_MS};

fn full_field() -> Vec<Bomb> {
    let mut bombs = Vec::with_capacity(GRID_ROWS * GRID_COLS);
    let mut id = 0;
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            id += 1;
            bombs.push(Bomb::player(id, Position::from_tile(row, col)));
        }
    }
    bombs
}

fn bench_chain_detonation(c: &mut Criterion) {
    c.bench_function("chain_full_board", |b| {
        b.iter(|| {
            let mut bombs = full_field();
            let mut explosions: Vec<Explosion> = Vec::new();
            detonate(
                black_box(Position::from_tile(7, 7)),
                &mut bombs,
                &mut explosions,
            )
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut game = GameState::with_board(Board::empty(), SimpleRng::new(12345));
    game.scatter_initial_bombs(5);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(TICK_MS));
        })
    });
}

fn bench_place_and_detonate_cycle(c: &mut Criterion) {
    c.bench_function("place_three_and_pop", |b| {
        b.iter(|| {
            let mut game = GameState::with_board(Board::empty(), SimpleRng::new(1));
            game.place_player_bomb(Position::from_tile(1, 1));
            game.place_player_bomb(Position::from_tile(3, 3));
            game.place_player_bomb(Position::from_tile(5, 5));
            game.tick(TICK_MS);
            black_box(game.explosions().len())
        })
    });
}

criterion_group!(
    benches,
    bench_chain_detonation,
    bench_tick,
    bench_place_and_detonate_cycle
);
criterion_main!(benches);
