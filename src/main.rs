//! Cyber Arcade entry point
//!
//! Handles platform-specific initialization and runs the game drivers. The
//! wasm build owns the DOM: menu wiring, pointer input, one shared
//! requestAnimationFrame loop feeding wall-clock deltas into whichever game
//! core is active, and sprite/HUD writes back out. Native builds run a
//! headless demo session for quick sanity checks.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, HtmlInputElement, PointerEvent};

    use cyber_arcade::catch::{
        self, FrameEvent, FrameInput, Playfield, SessionPhase, SessionState,
    };
    use cyber_arcade::memory::{MemoryGame, MemoryPhase};
    use cyber_arcade::word::{SubmitOutcome, WordGame};
    use cyber_arcade::{Difficulty, GameKey, HighScores, ScoreRecord, Settings};

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn by_id(id: &str) -> Option<Element> {
        document().get_element_by_id(id)
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_shown(id: &str, shown: bool) {
        if let Some(el) = by_id(id) {
            let _ = el.set_attribute("class", if shown { "" } else { "hidden" });
        }
    }

    fn style(el: &Element) -> Option<web_sys::CssStyleDeclaration> {
        el.dyn_ref::<HtmlElement>().map(|h| h.style())
    }

    fn set_style(el: &Element, prop: &str, value: &str) {
        if let Some(style) = style(el) {
            let _ = style.set_property(prop, value);
        }
    }

    /// DOM handles for the catch playfield
    struct CatchView {
        field_el: Element,
        basket_el: Element,
        sprites: HashMap<u32, Element>,
    }

    struct MemoryView {
        cells: Vec<Element>,
        quiz_shown: bool,
    }

    enum Session {
        Idle,
        Catch { state: SessionState, view: CatchView },
        Memory { game: MemoryGame, view: MemoryView },
        Word { game: WordGame },
    }

    /// Everything the driver owns
    struct App {
        settings: Settings,
        highscores: HighScores,
        selected_game: GameKey,
        selected_difficulty: Difficulty,
        session: Session,
        input: FrameInput,
        last_time: f64,
    }

    impl App {
        fn new() -> Self {
            let settings = Settings::load();
            Self {
                selected_game: settings.last_game,
                selected_difficulty: settings.last_difficulty,
                settings,
                highscores: HighScores::load(),
                session: Session::Idle,
                input: FrameInput::default(),
                last_time: 0.0,
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cyber Arcade starting...");

        let app = Rc::new(RefCell::new(App::new()));

        // Pre-select the remembered menu entries
        {
            let a = app.borrow();
            mark_selection(a.selected_game, a.selected_difficulty);
            if let Some(input) = by_id("player-name").and_then(|e| e.dyn_into::<HtmlInputElement>().ok()) {
                input.set_value(&a.settings.player_name);
            }
        }

        setup_menu(app.clone());
        setup_catch_input(app.clone());
        setup_memory_input(app.clone());
        setup_word_input(app.clone());
        setup_result_buttons(app.clone());

        request_animation_frame(app);

        log::info!("Cyber Arcade running!");
    }

    // ─── Session lifecycle ───────────────────────────────────────────────

    fn start_selected(app: &mut App) {
        teardown_session(&mut app.session);

        if let Some(input) = by_id("player-name").and_then(|e| e.dyn_into::<HtmlInputElement>().ok()) {
            app.settings.player_name = input.value();
        }
        app.settings
            .remember_selection(app.selected_game, app.selected_difficulty);
        app.settings.save();

        set_shown("menu", false);
        set_shown("result", false);
        set_shown("game-catch", app.selected_game == GameKey::Catch);
        set_shown("game-memory", app.selected_game == GameKey::Memory);
        set_shown("game-word", app.selected_game == GameKey::Word);
        set_shown("quiz", false);

        let seed = js_sys::Date::now() as u64;
        let difficulty = app.selected_difficulty;

        app.session = match app.selected_game {
            GameKey::Catch => {
                let field_el = by_id("playfield").expect("no playfield element");
                let basket_el = by_id("basket").expect("no basket element");
                let field = measure(&field_el);
                let mut state = SessionState::new(difficulty, field, seed);
                state.basket.x = field.width / 2.0;
                state.start();
                app.input = FrameInput::default();
                Session::Catch {
                    state,
                    view: CatchView {
                        field_el,
                        basket_el,
                        sprites: HashMap::new(),
                    },
                }
            }
            GameKey::Memory => {
                let game = MemoryGame::new(difficulty, seed);
                let view = build_memory_grid(&game);
                Session::Memory {
                    game,
                    view,
                }
            }
            GameKey::Word => {
                let game = WordGame::new(difficulty, seed);
                render_word(&game);
                Session::Word { game }
            }
        };
    }

    /// Drop the active session and its driver-owned DOM nodes. A replay
    /// always goes through here: fresh state, fresh sprites, no timer from
    /// a previous run can touch the new one.
    fn teardown_session(session: &mut Session) {
        if let Session::Catch { view, .. } = session {
            for (_, sprite) in view.sprites.drain() {
                sprite.remove();
            }
        }
        *session = Session::Idle;
    }

    fn finish_session(app: &mut App, score: u32) {
        let record = ScoreRecord {
            game: app.selected_game,
            difficulty: app.selected_difficulty,
            score,
            player: Some(app.settings.display_name().to_string()),
        };
        log::info!(
            "session result: {}",
            serde_json::to_string(&record).unwrap_or_default()
        );

        let rank = app.highscores.add_score(
            record.game,
            record.difficulty,
            score,
            app.settings.display_name(),
            js_sys::Date::now(),
        );
        app.highscores.save();

        teardown_session(&mut app.session);

        set_shown("game-catch", false);
        set_shown("game-memory", false);
        set_shown("game-word", false);
        set_shown("quiz", false);
        set_text("result-title", record.game.title());
        set_text("result-score", &score.to_string());
        set_text(
            "result-rank",
            &match rank {
                Some(r) => format!("#{r} on the local leaderboard"),
                None => "No leaderboard entry this time".to_string(),
            },
        );
        set_shown("result", true);
    }

    // ─── Frame loop ──────────────────────────────────────────────────────

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            let a = &mut *a;

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            a.last_time = time;

            let mut finished: Option<u32> = None;
            match &mut a.session {
                Session::Idle => {}
                Session::Catch { state, view } => {
                    // Zero-size playfield gates the start; keep re-measuring
                    // until layout gives us real dimensions
                    if state.phase == SessionPhase::Idle {
                        let field = measure(&view.field_el);
                        state.field = field;
                        state.basket.x = field.width / 2.0;
                        state.start();
                    }

                    for event in catch::tick(state, &a.input, dt) {
                        match event {
                            FrameEvent::Finished { score } => finished = Some(score),
                            FrameEvent::GoodCatch { combo, gained, .. } => {
                                log::debug!("catch +{gained} (combo {combo})");
                            }
                            FrameEvent::BadCatch { lost, .. } => {
                                log::debug!("bad catch -{lost}");
                            }
                            FrameEvent::GoodMiss { .. } => {}
                        }
                    }
                    sync_catch_view(state, view);
                }
                Session::Memory { game, view } => {
                    finished = game.tick(dt);
                    render_memory(game, view);
                }
                Session::Word { game } => {
                    finished = game.tick(dt);
                    render_word_hud(game);
                }
            }

            if let Some(score) = finished {
                finish_session(a, score);
            }
        }

        request_animation_frame(app);
    }

    // ─── Catch driver ────────────────────────────────────────────────────

    fn measure(field_el: &Element) -> Playfield {
        Playfield::new(field_el.client_width() as f32, field_el.client_height() as f32)
    }

    fn sync_catch_view(state: &SessionState, view: &mut CatchView) {
        let item_size = state.field.item_size();
        let basket_w = state.field.basket_width();
        let basket_h = state.field.basket_height();

        set_style(&view.basket_el, "width", &format!("{basket_w}px"));
        set_style(&view.basket_el, "height", &format!("{basket_h}px"));
        set_style(
            &view.basket_el,
            "left",
            &format!("{}px", state.basket.x - basket_w / 2.0),
        );

        for item in &state.drops {
            let sprite = view.sprites.entry(item.id).or_insert_with(|| {
                let el = document().create_element("div").unwrap();
                let kind = match item.kind {
                    catch::ItemKind::Good => "drop drop-good",
                    catch::ItemKind::Bad => "drop drop-bad",
                };
                let _ = el.set_attribute("class", kind);
                let _ = view.field_el.append_child(&el);
                el
            });
            set_style(sprite, "width", &format!("{item_size}px"));
            set_style(sprite, "height", &format!("{item_size}px"));
            set_style(sprite, "left", &format!("{}px", item.pos.x));
            set_style(sprite, "top", &format!("{}px", item.pos.y));
            set_style(sprite, "transform", &format!("rotate({}deg)", item.angle));
        }

        // Sprites whose items were caught, missed, or purged
        let live: Vec<u32> = state.drops.iter().map(|d| d.id).collect();
        view.sprites.retain(|id, sprite| {
            if live.contains(id) {
                true
            } else {
                sprite.remove();
                false
            }
        });

        set_text("catch-score", &state.score.to_string());
        set_text(
            "catch-combo",
            &format!("x{}", catch::combo_multiplier(state.combo)),
        );
        set_time_bar(
            "catch-time-fill",
            state.time_left,
            state.config.duration_secs,
        );
    }

    fn setup_catch_input(app: Rc<RefCell<App>>) {
        let Some(field_el) = by_id("playfield") else {
            return;
        };

        let field_for_x = field_el.clone();
        let pointer_x = move |event: &PointerEvent| -> f32 {
            let rect = field_for_x.get_bounding_client_rect();
            event.client_x() as f32 - rect.left() as f32
        };

        {
            let app = app.clone();
            let field = field_el.clone();
            let pointer_x = pointer_x.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let _ = field.set_pointer_capture(event.pointer_id());
                app.borrow_mut().input.pointer_x = Some(pointer_x(&event));
            });
            let _ = field_el
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let pointer_x = pointer_x.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut a = app.borrow_mut();
                // Only while held down; a hover never moves the basket
                if a.input.pointer_x.is_some() {
                    a.input.pointer_x = Some(pointer_x(&event));
                }
            });
            let _ = field_el
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release, capture loss, and leaving the area all mean "no pointer"
        for kind in ["pointerup", "pointercancel", "pointerleave"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                app.borrow_mut().input.pointer_x = None;
            });
            let _ =
                field_el.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    // ─── Memory driver ───────────────────────────────────────────────────

    fn build_memory_grid(game: &MemoryGame) -> MemoryView {
        let Some(grid) = by_id("memory-grid") else {
            return MemoryView {
                cells: Vec::new(),
                quiz_shown: false,
            };
        };
        grid.set_text_content(None);
        set_style(
            &grid,
            "grid-template-columns",
            &format!("repeat({}, 1fr)", game.config.cols),
        );

        let doc = document();
        let mut cells = Vec::with_capacity(game.cards.len());
        for idx in 0..game.cards.len() {
            let cell = doc.create_element("button").unwrap();
            let _ = cell.set_attribute("class", "card");
            let _ = cell.set_attribute("data-idx", &idx.to_string());
            let _ = grid.append_child(&cell);
            cells.push(cell);
        }
        MemoryView {
            cells,
            quiz_shown: false,
        }
    }

    fn render_memory(game: &MemoryGame, view: &mut MemoryView) {
        for (idx, cell) in view.cells.iter().enumerate() {
            let Some(card) = game.cards.get(idx) else {
                continue;
            };
            let class = if card.matched {
                "card matched"
            } else if card.flipped {
                "card flipped"
            } else {
                "card"
            };
            let _ = cell.set_attribute("class", class);
            cell.set_text_content(if card.flipped || card.matched {
                Some(card.icon)
            } else {
                None
            });
        }

        set_text("memory-score", &game.score.to_string());
        set_text("memory-streak", &format!("x{}", game.streak));
        set_text("memory-round", &format!("Round {}", game.round));
        set_text(
            "memory-pairs",
            &format!("{}/{} pairs", game.matches, game.config.total_pairs()),
        );
        set_time_bar("memory-time-fill", game.time_left, game.config.duration_secs);

        match game.phase {
            MemoryPhase::Quiz if !view.quiz_shown => {
                if let Some(question) = game.quiz {
                    set_text("quiz-prompt", question.prompt);
                    for (i, choice) in question.choices.iter().enumerate() {
                        set_text(&format!("quiz-choice-{i}"), choice);
                    }
                    set_shown("quiz", true);
                    view.quiz_shown = true;
                }
            }
            MemoryPhase::Play => view.quiz_shown = false,
            _ => {}
        }
    }

    fn setup_memory_input(app: Rc<RefCell<App>>) {
        if let Some(grid) = by_id("memory-grid") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                let Some(cell) = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest("[data-idx]").ok().flatten())
                else {
                    return;
                };
                let Some(idx) = cell
                    .get_attribute("data-idx")
                    .and_then(|s| s.parse::<usize>().ok())
                else {
                    return;
                };
                if let Session::Memory { game, .. } = &mut app.borrow_mut().session {
                    game.flip(idx);
                }
            });
            let _ = grid.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for choice in 0..3usize {
            let Some(btn) = by_id(&format!("quiz-choice-{choice}")) else {
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut a = app.borrow_mut();
                if let Session::Memory { game, view } = &mut a.session {
                    let correct = game.answer_quiz(choice);
                    log::info!(
                        "quiz answered {}",
                        if correct { "correctly" } else { "wrong" }
                    );
                    view.quiz_shown = false;
                    set_shown("quiz", false);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    // ─── Word driver ─────────────────────────────────────────────────────

    /// Rebuild the slot row and letter pool for the current word. Called on
    /// session start and after every command, not per frame.
    fn render_word(game: &WordGame) {
        let doc = document();

        if let Some(slot_row) = by_id("word-slots") {
            slot_row.set_text_content(None);
            for slot in game.slots() {
                let el = doc.create_element("span").unwrap();
                let _ = el.set_attribute(
                    "class",
                    if slot.is_some() { "slot filled" } else { "slot" },
                );
                el.set_text_content(Some(&slot.map(String::from).unwrap_or_else(|| "_".into())));
                let _ = slot_row.append_child(&el);
            }
        }

        if let Some(pool) = by_id("word-pool") {
            pool.set_text_content(None);
            for (idx, tile) in game.pool.iter().enumerate() {
                let el = doc.create_element("button").unwrap();
                let class = if tile.hint_consumed {
                    "tile hint-spent"
                } else if tile.used {
                    "tile used"
                } else {
                    "tile"
                };
                let _ = el.set_attribute("class", class);
                let _ = el.set_attribute("data-idx", &idx.to_string());
                el.set_text_content(Some(&tile.ch.to_string()));
                let _ = pool.append_child(&el);
            }
        }

        let word = game.current_word();
        set_text("word-category", word.category);
        set_text("word-hint-text", if game.hint_used { word.hint } else { "" });
    }

    fn render_word_hud(game: &WordGame) {
        set_text("word-score", &game.score.to_string());
        set_text("word-streak", &format!("x{}", game.streak));
        set_time_bar("word-time-fill", game.time_left, game.config.duration_secs);
    }

    fn setup_word_input(app: Rc<RefCell<App>>) {
        if let Some(pool) = by_id("word-pool") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                let Some(idx) = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest("[data-idx]").ok().flatten())
                    .and_then(|el| el.get_attribute("data-idx"))
                    .and_then(|s| s.parse::<usize>().ok())
                else {
                    return;
                };
                if let Session::Word { game } = &mut app.borrow_mut().session {
                    game.pick_letter(idx);
                    render_word(game);
                }
            });
            let _ = pool.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = by_id("word-hint") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                if let Session::Word { game } = &mut app.borrow_mut().session {
                    game.use_hint();
                    render_word(game);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = by_id("word-clear") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                if let Session::Word { game } = &mut app.borrow_mut().session {
                    game.clear_picks();
                    render_word(game);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = by_id("word-submit") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                if let Session::Word { game } = &mut app.borrow_mut().session {
                    match game.submit() {
                        Some(SubmitOutcome::Correct { points }) => {
                            log::info!("word solved, +{points}");
                        }
                        Some(SubmitOutcome::Wrong) => log::info!("wrong word"),
                        None => {}
                    }
                    render_word(game);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    // ─── Menu and result wiring ──────────────────────────────────────────

    fn mark_selection(game: GameKey, difficulty: Difficulty) {
        for g in GameKey::ALL {
            if let Some(btn) = by_id(&format!("pick-{}", g.as_str())) {
                let class = if g == game { "pick selected" } else { "pick" };
                let _ = btn.set_attribute("class", class);
            }
        }
        for d in Difficulty::ALL {
            if let Some(btn) = by_id(&format!("diff-{}", d.as_str())) {
                let class = if d == difficulty { "pick selected" } else { "pick" };
                let _ = btn.set_attribute("class", class);
            }
        }
    }

    fn setup_menu(app: Rc<RefCell<App>>) {
        for game in GameKey::ALL {
            let Some(btn) = by_id(&format!("pick-{}", game.as_str())) else {
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut a = app.borrow_mut();
                a.selected_game = game;
                mark_selection(a.selected_game, a.selected_difficulty);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for difficulty in Difficulty::ALL {
            let Some(btn) = by_id(&format!("diff-{}", difficulty.as_str())) else {
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut a = app.borrow_mut();
                a.selected_difficulty = difficulty;
                mark_selection(a.selected_game, a.selected_difficulty);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = by_id("start-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                start_selected(&mut app.borrow_mut());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_result_buttons(app: Rc<RefCell<App>>) {
        if let Some(btn) = by_id("replay-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                start_selected(&mut app.borrow_mut());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = by_id("back-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut a = app.borrow_mut();
                teardown_session(&mut a.session);
                set_shown("result", false);
                set_shown("menu", true);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn set_time_bar(id: &str, time_left: f32, duration: f32) {
        if let Some(el) = by_id(id) {
            let pct = if duration > 0.0 {
                (time_left / duration * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };
            set_style(&el, "width", &format!("{pct:.1}%"));
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cyber_arcade::Difficulty;
    use cyber_arcade::catch::{FrameEvent, FrameInput, Playfield, SessionState, tick};

    env_logger::init();
    log::info!("Cyber Arcade (native) starting...");
    log::info!("Native mode has no UI - run with `trunk serve` for the web version");

    // Headless demo: one minute of simulated play at 60 fps with the
    // pointer parked mid-field
    let mut state = SessionState::new(Difficulty::Standard, Playfield::new(800.0, 600.0), 1234);
    state.start();
    let input = FrameInput {
        pointer_x: Some(400.0),
    };

    let dt = 1.0 / 60.0;
    loop {
        let events = tick(&mut state, &input, dt);
        if let Some(FrameEvent::Finished { score }) = events
            .iter()
            .find(|e| matches!(e, FrameEvent::Finished { .. }))
        {
            println!("Demo session finished with score {score}");
            break;
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
