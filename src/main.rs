//! Burger Blitz entry point
//!
//! Native builds run a headless demo: the autopilot plays for a while and
//! the run is reported through the log. The web build is driven from
//! JavaScript through `burger_blitz::web::WebGame`.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use clap::Parser;

    use burger_blitz::persistence::{BestScore, MemoryStorage};
    use burger_blitz::sim::{GameEvent, GameState, TickInput, World, tick};
    use burger_blitz::view::HudSnapshot;

    #[derive(Debug, Parser)]
    #[command(name = "burger-blitz", about = "Headless Burger Blitz demo run")]
    pub struct Args {
        /// RNG seed (defaults to the current time)
        #[arg(long)]
        pub seed: Option<u64>,

        /// Simulated seconds to play
        #[arg(long, default_value_t = 120.0)]
        pub seconds: f32,

        /// Simulated frames per second
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
        pub fps: u32,

        #[arg(long, default_value_t = burger_blitz::consts::DEFAULT_WORLD_WIDTH)]
        pub width: f32,

        #[arg(long, default_value_t = burger_blitz::consts::DEFAULT_WORLD_HEIGHT)]
        pub height: f32,
    }

    pub fn run(args: Args) {
        let seed = args.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
        log::info!("Burger Blitz (headless) starting, seed {}", seed);

        let mut storage = MemoryStorage::new();
        let best = BestScore::load(&storage);
        let world = World::new(args.width, args.height);
        let mut state = GameState::with_world(seed, world).with_best_score(best.0);

        let dt = 1.0 / args.fps as f32;
        let frames = (args.seconds.max(0.0) * args.fps as f32) as u64;
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };

        let mut orders = 0u32;
        let mut runs = 0u32;
        for _ in 0..frames {
            tick(&mut state, &input, dt);
            for event in state.drain_events() {
                log::debug!("{:?}", event);
                match event {
                    GameEvent::OrderComplete { .. } => orders += 1,
                    GameEvent::GameOver { .. } => runs += 1,
                    GameEvent::NewBestScore { score } => BestScore(score).store(&mut storage),
                    _ => {}
                }
            }
        }

        let hud = HudSnapshot::from_state(&state);
        log::info!(
            "Done: {} orders, {} finished runs, score {}, level {}, best {}",
            orders,
            runs,
            hud.score,
            hud.level,
            hud.best_score
        );
        println!(
            "score={} level={} lives={} best={} orders={} runs={}",
            hud.score, hud.level, hud.lives, hud.best_score, orders, runs
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    headless::run(headless::Args::parse());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is burger_blitz::web::WebGame, this is just to satisfy the compiler
}
