//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use brick_breaker::GameConfig;
    use brick_breaker::renderer::{RenderState, shapes};
    use brick_breaker::sim::{FrameDriver, GameState, TickInput};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        driver: FrameDriver,
        input: TickInput,
        paddle_speed: f32,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(config: &GameConfig) -> Self {
            Self {
                state: GameState::new(config),
                render_state: None,
                driver: FrameDriver::new(),
                input: TickInput::default(),
                paddle_speed: config.paddle_speed,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one simulation frame
        fn update(&mut self, time: f64) {
            let input = self.input;
            self.driver.advance(&mut self.state, &input);

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = shapes::scene(&self.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().expect("no window");
            let document = window.document().expect("no document");

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", self.state.score)));
            }

            if let Some(el) = document.get_element_by_id("fps") {
                el.set_text_content(Some(&self.fps.to_string()));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Breaker starting...");

        let config = GameConfig::default();
        config.log_summary();

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fixed-size arena; the canvas backing store matches it exactly
        canvas.set_width(config.arena_width as u32);
        canvas.set_height(config.arena_height as u32);

        let game = Rc::new(RefCell::new(Game::new(&config)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            config.arena_width as u32,
            config.arena_height as u32,
            (config.arena_width, config.arena_height),
        )
        .await;
        game.borrow_mut().render_state = Some(render_state);

        // Set up input handlers
        setup_input_handlers(game.clone());

        // Set up the rules overlay buttons
        setup_rules_panel();

        // Start game loop
        request_animation_frame(game);

        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down: steer the paddle. Legacy ("Right"/"Left") and modern
        // ("ArrowRight"/"ArrowLeft") key names are equivalent.
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let speed = g.paddle_speed;
                match event.key().as_str() {
                    "Right" | "ArrowRight" => g.input.paddle_dx = speed,
                    "Left" | "ArrowLeft" => g.input.paddle_dx = -speed,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: releasing either direction stops the paddle
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                match event.key().as_str() {
                    "Right" | "ArrowRight" | "Left" | "ArrowLeft" => {
                        game.borrow_mut().input.paddle_dx = 0.0;
                    }
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Wire the "show rules" / "close" buttons to the rules overlay
    fn setup_rules_panel() {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let (Some(btn), Some(rules)) = (
            document.get_element_by_id("rules-btn"),
            document.get_element_by_id("rules"),
        ) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let _ = rules.class_list().add_1("show");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let (Some(btn), Some(rules)) = (
            document.get_element_by_id("close-btn"),
            document.get_element_by_id("rules"),
        ) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let _ = rules.class_list().remove_1("show");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            if !g.driver.running() {
                log::info!("Game loop stopped");
                return;
            }
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::GameConfig;
    use brick_breaker::sim::{FrameDriver, GameState, TickInput};

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let config = GameConfig::default();
    config.log_summary();

    let mut state = GameState::new(&config);
    let mut driver = FrameDriver::new();

    // Headless demo: chase the ball with the paddle for ten seconds of frames
    // at a nominal 60 Hz, then use the stop hook to exit cleanly.
    let mut frames = 0u32;
    while driver.running() {
        let target = state.ball.pos.x - state.paddle.size.x / 2.0;
        let dx = (target - state.paddle.pos.x).clamp(-config.paddle_speed, config.paddle_speed);
        driver.advance(&mut state, &TickInput { paddle_dx: dx });

        frames += 1;
        if frames >= 600 {
            driver.stop();
        }
    }

    log::info!(
        "Headless run done: frame {}, score {}, {} bricks standing",
        state.frame,
        state.score,
        state.bricks.visible_count()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
