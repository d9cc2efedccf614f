use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quizboard::core::{Board, Category, Game, GameRules, GameSnapshot, Player, Question};

fn fresh_game() -> Game {
    let board = Board::new(
        (0..6)
            .map(|c| {
                Category::new(
                    format!("Category {c}"),
                    (0..5)
                        .map(|r| Question::new(format!("Q{c}-{r}"), format!("A{c}-{r}"), 100 * (r + 1)))
                        .collect(),
                )
            })
            .collect(),
    );
    Game::new(
        vec![
            Player::new("alice", "Alice"),
            Player::new("bob", "Bob"),
            Player::new("charlie", "Charlie"),
        ],
        board,
        GameRules::classic(),
    )
    .unwrap()
}

fn bench_turn_cycle(c: &mut Criterion) {
    c.bench_function("turn_cycle_buzz_chain", |b| {
        b.iter(|| {
            let mut game = fresh_game();
            game.select_question(black_box(0), black_box(0)).unwrap();
            game.answer(false).unwrap();
            game.buzz("bob").unwrap();
            game.answer(false).unwrap();
            game.buzz("charlie").unwrap();
            game.answer(true).unwrap();
            game.continue_turn().unwrap();
            game
        })
    });
}

fn bench_snapshot_capture(c: &mut Criterion) {
    let mut game = fresh_game();
    game.select_question(0, 0).unwrap();
    game.answer(false).unwrap();

    c.bench_function("snapshot_capture", |b| {
        b.iter(|| GameSnapshot::capture(black_box(&game)))
    });
}

fn bench_full_board(c: &mut Criterion) {
    c.bench_function("play_out_30_question_board", |b| {
        b.iter(|| {
            let mut game = fresh_game();
            for category in 0..6 {
                for row in 0..5 {
                    game.select_question(category, row).unwrap();
                    game.answer(true).unwrap();
                    game.continue_turn().unwrap();
                }
            }
            game
        })
    });
}

criterion_group!(
    benches,
    bench_turn_cycle,
    bench_snapshot_capture,
    bench_full_board
);
criterion_main!(benches);
