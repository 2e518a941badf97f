use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_catch::core::{GameConfig, GameState};
use tui_catch::term::{FrameBuffer, GameView, Viewport};
use tui_catch::types::{BlockColor, GameAction, InputSource};

/// A paused-spawn field with `n` blocks spread over the upper rows.
fn crowded_state(n: usize) -> GameState {
    let mut state = GameState::with_config(GameConfig {
        spawn_chance: 0.0,
        seed: Some(12345),
        ..GameConfig::default()
    });
    for i in 0..n {
        let x = 10.0 + (i % 80) as f32;
        let y = (i % 40) as f32;
        state.place_block(x, y, BlockColor::ALL[i % 2]);
    }
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            black_box(state.tick());
        })
    });
}

fn bench_resolve_catches(c: &mut Criterion) {
    let state = crowded_state(200);

    c.bench_function("resolve_catches_200_blocks", |b| {
        b.iter(|| {
            let mut s = state.clone();
            black_box(s.resolve_catches());
        })
    });
}

fn bench_move_player(c: &mut Criterion) {
    let mut state = crowded_state(50);

    c.bench_function("move_player", |b| {
        let mut right = true;
        b.iter(|| {
            let action = if right {
                GameAction::MoveRight(InputSource::Keyboard)
            } else {
                GameAction::MoveLeft(InputSource::Keyboard)
            };
            right = !right;
            black_box(state.apply_action(action));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = crowded_state(50);
    let view = GameView::default();
    let viewport = Viewport::new(80, 30);
    let mut snap = state.snapshot();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_resolve_catches,
    bench_move_player,
    bench_render
);
criterion_main!(benches);
