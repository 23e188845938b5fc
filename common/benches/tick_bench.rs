use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::collections::HashSet;
use std::time::Duration;
use common::games::SessionRng;
use common::games::snake::{
    Difficulty, Direction, FieldSize, Food, GameCommand, GameState, Point, Snake, SnakeGame,
    SnakeSessionSettings, WallCollisionMode, generate_obstacles,
};

const NOW: u64 = 1_000_000;

fn bench_wraparound_ticks() {
    let settings = SnakeSessionSettings {
        field_size: FieldSize::new(30, 25),
        difficulty: Difficulty::Easy,
        wall_collision_mode: WallCollisionMode::WrapAround,
    };
    let mut game = SnakeGame::new(settings, SessionRng::new(42));
    let _ = game.handle_command(GameCommand::Start);

    let turns = [Direction::Down, Direction::Right, Direction::Up, Direction::Right];
    for i in 0..1_000u64 {
        if game.state() == GameState::GameOver {
            let _ = game.handle_command(GameCommand::Restart);
        }
        if i % 7 == 0 {
            let _ = game.handle_command(GameCommand::Turn(turns[(i / 7) as usize % turns.len()]));
        }
        game.tick(NOW + i * 10);
    }
}

fn bench_spawn_food_crowded() {
    let field = FieldSize::new(30, 25);
    let mut snake = Snake::new(Point::new(15, 12), Direction::Right);
    snake.grow(200);
    let obstacles: HashSet<Point> = (0..30).map(|x| Point::new(x, 0)).collect();
    let mut rng = SessionRng::new(7);
    for _ in 0..100 {
        Food::spawn(&field, &snake, &obstacles, 700, &mut rng);
    }
}

fn bench_generate_extreme_obstacles() {
    let field = FieldSize::new(30, 25);
    let snake = Snake::new(Point::new(15, 12), Direction::Right);
    let mut rng = SessionRng::new(7);
    for _ in 0..100 {
        generate_obstacles(10, &field, &snake, Point::new(3, 3), &mut rng);
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("1000_wraparound_ticks", |b| {
        b.iter(bench_wraparound_ticks)
    });

    group.bench_function("spawn_food_crowded", |b| {
        b.iter(bench_spawn_food_crowded)
    });

    group.bench_function("generate_extreme_obstacles", |b| {
        b.iter(bench_generate_extreme_obstacles)
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
