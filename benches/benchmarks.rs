criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        generating_random_game,
        searching_minimax,
        searching_alpha_beta,
        searching_alpha_beta_cutoff,
        searching_general_minimax,
}

fn game() -> DagGame {
    DagGame::generate(8, 4, &mut SmallRng::seed_from_u64(0))
}

fn generating_random_game(c: &mut criterion::Criterion) {
    c.bench_function("generate a random game (default shape)", |b| {
        b.iter(|| DagGame::random())
    });
}

fn searching_minimax(c: &mut criterion::Criterion) {
    let ref game = game();
    c.bench_function("minimax over payoff vectors (depth 8, width 4)", |b| {
        b.iter(|| Minimax.decide(game))
    });
}

fn searching_alpha_beta(c: &mut criterion::Criterion) {
    let ref game = game();
    c.bench_function("alpha-beta (depth 8, width 4)", |b| {
        b.iter(|| AlphaBeta.decide(game))
    });
}

fn searching_alpha_beta_cutoff(c: &mut criterion::Criterion) {
    let ref game = game();
    let estimate = |s: &DagState| game.estimate(s);
    c.bench_function("alpha-beta with cutoff at 4 plies (depth 8, width 4)", |b| {
        b.iter(|| AlphaBetaCutoff::new(4, estimate).decide(game))
    });
}

fn searching_general_minimax(c: &mut criterion::Criterion) {
    let ref game = game();
    c.bench_function("general minimax (depth 8, width 4)", |b| {
        b.iter(|| GeneralMinimax.decide(game))
    });
}

use adversarial::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
