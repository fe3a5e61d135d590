//! Star Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use star_pong::audio::{AudioManager, SoundEffect};
    use star_pong::consts::{BOARD_HEIGHT, BOARD_WIDTH};
    use star_pong::persistence::LocalStorageStore;
    use star_pong::platform::{PointerMapper, now_seed};
    use star_pong::renderer::{RenderState, StarField};
    use star_pong::sim::Side;
    use star_pong::{Difficulty, Session, Settings};

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStorageStore>,
        render_state: Option<RenderState>,
        stars: StarField,
        settings: Settings,
        audio: AudioManager,
        /// Whether an animation frame callback is pending
        loop_scheduled: bool,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let settings = Settings::load();
            Self {
                session: Session::new(LocalStorageStore::new(), seed),
                render_state: None,
                stars: StarField::new(seed ^ 0x5eed),
                audio: AudioManager::new(&settings),
                settings,
                loop_scheduled: false,
            }
        }

        /// Advance one frame and hand events to the audio collaborator
        fn update(&mut self) -> Option<Side> {
            let report = self.session.frame();
            for event in &report.events {
                self.audio.play(SoundEffect::for_event(event));
            }
            report.winner
        }

        /// Render the current frame
        fn render(&mut self) {
            self.stars.update(&self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render_game(self.session.state(), &self.stars) {
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
    }

    fn document() -> web_sys::Document {
        web_sys::window()
            .and_then(|w| w.document())
            .expect("no document")
    }

    /// Show or hide an element by id using the `hidden` class
    fn set_visible(id: &str, visible: bool) {
        if let Some(el) = document().get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if visible {
                classes.remove_1("hidden")
            } else {
                classes.add_1("hidden")
            };
        }
    }

    /// Mark the active difficulty and put a checkmark on completed ones
    fn update_difficulty_buttons(session: &Session<LocalStorageStore>) {
        let document = document();
        for difficulty in Difficulty::ALL {
            let id = format!("{}Btn", difficulty.as_str());
            if let Some(btn) = document.get_element_by_id(&id) {
                let classes = btn.class_list();
                let _ = if session.is_completed(difficulty) {
                    classes.add_1("completed")
                } else {
                    classes.remove_1("completed")
                };
                let _ = if session.difficulty() == difficulty {
                    classes.add_1("active")
                } else {
                    classes.remove_1("active")
                };
            }
        }
    }

    fn show_game_over(session: &Session<LocalStorageStore>, winner: Side) {
        let document = document();
        if let Some(el) = document.get_element_by_id("winnerText") {
            let text = match winner {
                Side::Left => "You Win!",
                Side::Right => "AI Wins!",
            };
            el.set_text_content(Some(text));
        }
        if let Some(el) = document.get_element_by_id("finalScore") {
            let score = session.final_score();
            el.set_text_content(Some(&format!("Final Score: {} - {}", score.left, score.right)));
        }
        set_visible("gameOverScreen", true);
        update_difficulty_buttons(session);
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Star Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // The canvas starts hidden, so size the backing store from the board
        let dpr = window.device_pixel_ratio();
        let width = (BOARD_WIDTH as f64 * dpr) as u32;
        let height = (BOARD_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = now_seed();
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
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

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_difficulty_buttons(game.clone());
        setup_end_screen_buttons(game.clone());
        setup_settings_buttons(game.clone());

        {
            let mut g = game.borrow_mut();
            update_difficulty_buttons(&g.session);
            update_settings_labels(&g.settings);
            g.render();
        }
        set_visible("loading", false);
        set_visible("startScreen", true);

        log::info!("Star Pong ready");
    }

    fn set_pointer(game: &Rc<RefCell<Game>>, canvas: &HtmlCanvasElement, client_y: f32) {
        let rect = canvas.get_bounding_client_rect();
        let mapper = PointerMapper::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        );
        game.borrow_mut().session.set_pointer_y(mapper.board_y(client_y));
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                set_pointer(&game, &canvas_clone, event.client_y() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    set_pointer(&game, &canvas_clone, touch.client_y() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn start_game(game: &Rc<RefCell<Game>>) {
        set_visible("startScreen", false);
        set_visible("gameOverScreen", false);
        set_visible("pong", true);

        let schedule = {
            let mut g = game.borrow_mut();
            g.audio.resume();
            g.session.start();
            update_difficulty_buttons(&g.session);
            let schedule = !g.loop_scheduled;
            g.loop_scheduled = true;
            schedule
        };
        if schedule {
            request_animation_frame(game.clone());
        }
    }

    fn setup_difficulty_buttons(game: Rc<RefCell<Game>>) {
        let document = document();
        for difficulty in Difficulty::ALL {
            let id = format!("{}Btn", difficulty.as_str());
            if let Some(btn) = document.get_element_by_id(&id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().session.select_difficulty(difficulty);
                    start_game(&game);
                });
                let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_end_screen_buttons(game: Rc<RefCell<Game>>) {
        let document = document();

        // Play again with the same difficulty
        if let Some(btn) = document.get_element_by_id("playAgainButton") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                start_game(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Back to start screen
        if let Some(btn) = document.get_element_by_id("backToStartButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                set_visible("gameOverScreen", false);
                set_visible("pong", false);
                set_visible("startScreen", true);
                let mut g = game.borrow_mut();
                g.session.return_to_menu();
                update_difficulty_buttons(&g.session);
                g.render();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn update_settings_labels(settings: &Settings) {
        let document = document();
        if let Some(el) = document.get_element_by_id("muteButton") {
            let label = if settings.muted { "Sound: Off" } else { "Sound: On" };
            el.set_text_content(Some(label));
        }
        if let Some(el) = document.get_element_by_id("netButton") {
            el.set_text_content(Some(&format!("Stars: {}", settings.net_density.as_str())));
        }
    }

    /// Persist changed settings and push them to the audio and star field
    fn apply_settings(g: &mut Game) {
        g.settings.save();
        g.audio.apply_settings(&g.settings);
        update_settings_labels(&g.settings);
        // The frame loop redraws on its own while a match runs
        if !g.session.is_running() {
            g.render();
        }
    }

    fn setup_settings_buttons(game: Rc<RefCell<Game>>) {
        let document = document();

        if let Some(btn) = document.get_element_by_id("muteButton") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let muted = g.settings.toggle_mute();
                log::info!("Sound {}", if muted { "muted" } else { "unmuted" });
                apply_settings(&mut g);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("netButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let density = g.settings.cycle_net_density();
                log::info!("Net density set to {}", density.as_str());
                apply_settings(&mut g);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One simulation step then one render; stops scheduling once Idle
    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if !g.session.is_running() {
                g.loop_scheduled = false;
                return;
            }

            let winner = g.update();
            g.render();

            if let Some(winner) = winner {
                g.loop_scheduled = false;
                show_game_over(&g.session, winner);
                return;
            }
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
    use star_pong::persistence::{FileStore, MemoryStore, ProgressStore};
    use star_pong::Difficulty;

    env_logger::init();
    log::info!("Star Pong (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let difficulty = match args.next() {
        Some(arg) => arg.parse::<Difficulty>().unwrap_or_else(|e| {
            log::warn!("{}, using easy", e);
            Difficulty::Easy
        }),
        None => Difficulty::Easy,
    };
    let store: Box<dyn ProgressStore> = match args.next() {
        Some(path) => Box::new(FileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };

    demo::play_match(store, difficulty, star_pong::platform::now_seed());
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use star_pong::persistence::ProgressStore;
    use star_pong::sim::{GameEvent, Side};
    use star_pong::{Difficulty, Session};

    /// Frames before a demo match is abandoned (about half an hour at 60 Hz)
    const MAX_FRAMES: u64 = 60 * 60 * 30;
    /// How far the scripted pointer can move per frame
    const POINTER_SPEED: f32 = 7.0;

    /// Play one match with a scripted pointer that chases the ball
    pub fn play_match<S: ProgressStore>(store: S, difficulty: Difficulty, seed: u64) {
        let mut session = Session::new(store, seed);
        session.select_difficulty(difficulty);
        session.start();

        let mut pointer_y = session.state().player.center_y();
        let mut hits = 0u32;

        for frame in 0..MAX_FRAMES {
            let target = session.state().ball.center_y();
            pointer_y += (target - pointer_y).clamp(-POINTER_SPEED, POINTER_SPEED);
            session.set_pointer_y(pointer_y);

            let report = session.frame();
            for event in &report.events {
                match event {
                    GameEvent::PaddleHit { .. } => hits += 1,
                    GameEvent::PointScored { side } => {
                        let score = session.final_score();
                        println!(
                            "frame {:>6}: point to {:<5} {} - {}",
                            frame,
                            side.as_str(),
                            score.left,
                            score.right
                        );
                    }
                    GameEvent::GameWon | GameEvent::GameLost => {}
                }
            }

            if let Some(winner) = report.winner {
                let score = session.final_score();
                let who = match winner {
                    Side::Left => "Player",
                    Side::Right => "Opponent",
                };
                println!(
                    "{} wins {} - {} on {} after {} frames and {} paddle hits",
                    who,
                    score.left,
                    score.right,
                    difficulty.as_str(),
                    frame + 1,
                    hits
                );
                println!(
                    "Completed: easy={} medium={} hard={}",
                    session.is_completed(Difficulty::Easy),
                    session.is_completed(Difficulty::Medium),
                    session.is_completed(Difficulty::Hard)
                );
                return;
            }
        }

        log::warn!("Demo match hit the frame limit without a winner");
    }
}
