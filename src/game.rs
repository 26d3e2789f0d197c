//! Frame controller
//!
//! [`Pong`] owns the game state, the settings and the RNG used for serves.
//! A [`Host`] supplies the window, the controls and the canvas, and [`run`]
//! alternates update and draw once per tick until quit.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::{HostError, SettingsError};
use crate::platform::{Action, Control, Controls, poll};
use crate::renderer::{Canvas, draw_frame};
use crate::settings::{Settings, Variant};
use crate::sim::{GameEvent, GameState, tick};

/// What the host is asked to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub fps: u32,
    pub title: String,
    /// Control that ends the session
    pub quit: Control,
}

/// Presentation and input collaborator
pub trait Host {
    type Controls: Controls;
    type Canvas: Canvas;

    /// Open the canvas. Failure is fatal for the session.
    fn init(&mut self, window: &WindowConfig) -> Result<(), HostError>;

    /// Wait for the next tick and refresh the held controls
    fn begin_frame(&mut self);

    fn controls(&self) -> &Self::Controls;

    fn canvas(&mut self) -> &mut Self::Canvas;

    /// Present the frame drawn since `begin_frame`
    fn end_frame(&mut self);

    /// Window closed by the user
    fn quit_requested(&self) -> bool {
        false
    }
}

/// A single Pong session
#[derive(Debug, Clone)]
pub struct Pong {
    settings: Settings,
    state: GameState,
    rng: Pcg32,
    seed: u64,
}

impl Pong {
    /// Create a session. Settings are validated once here and never change.
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&settings, &mut rng);
        log::info!(
            "New game {}x{} seed {} phase {:?}",
            settings.width,
            settings.height,
            seed,
            state.phase
        );

        Ok(Self {
            settings,
            state,
            rng,
            seed,
        })
    }

    pub fn from_variant(variant: Variant, seed: u64) -> Result<Self, SettingsError> {
        log::info!("Variant: {}", variant.as_str());
        Self::new(Settings::from_variant(variant), seed)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts that script positions (replays, tests)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Window request for the host
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            width: self.settings.width,
            height: self.settings.height,
            fps: self.settings.fps,
            title: self.settings.title.clone(),
            quit: Action::Quit.bindings()[0],
        }
    }

    /// Run one frame with the controls held right now
    pub fn update(&mut self, controls: &impl Controls) {
        let input = poll(controls);
        tick(&mut self.state, &input, &self.settings, &mut self.rng);

        for event in &self.state.events {
            if let GameEvent::Goal { scorer } = event {
                let (left, right) = self.state.score();
                log::info!("{:?} scores ({} - {})", scorer, left, right);
            }
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        draw_frame(&self.state, &self.settings, canvas);
    }
}

/// Drive `pong` with `host` until quit. Returns the number of frames run.
pub fn run<H: Host>(pong: &mut Pong, host: &mut H) -> Result<u64, HostError> {
    let window = pong.window_config();
    host.init(&window)?;
    log::info!(
        "{} running at {} fps ({}x{})",
        window.title,
        window.fps,
        window.width,
        window.height
    );

    let mut frames = 0;
    loop {
        host.begin_frame();
        if host.quit_requested() || host.controls().is_held(window.quit) {
            break;
        }

        pong.update(host.controls());
        pong.draw(host.canvas());
        host.end_frame();
        frames += 1;
    }

    let (left, right) = pong.state().score();
    log::info!(
        "Quit after {} frames, final score {} - {}",
        frames,
        left,
        right
    );
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{HeadlessHost, HeldControls};
    use crate::sim::GamePhase;

    #[test]
    fn test_new_rejects_bad_settings() {
        let settings = Settings {
            width: 4,
            ..Settings::default()
        };
        assert!(Pong::new(settings, 1).is_err());
    }

    #[test]
    fn test_new_rejects_paddles_starting_out_of_range() {
        let settings = Settings {
            height: 20,
            paddle_height: 15,
            ..Settings::default()
        };
        assert!(matches!(
            Pong::new(settings, 1),
            Err(SettingsError::PaddleTooLarge { .. })
        ));
    }

    #[test]
    fn test_new_rejects_ball_touching_both_goals() {
        let settings = Settings {
            width: 16,
            height: 17,
            paddle_height: 8,
            ball_size: 8.0,
            ..Settings::default()
        };
        assert!(matches!(
            Pong::new(settings, 1),
            Err(SettingsError::ArenaTooNarrow { .. })
        ));
    }

    #[test]
    fn test_window_config() {
        let pong = Pong::from_variant(Variant::Classic, 1).unwrap();
        let window = pong.window_config();
        assert_eq!(window.width, 256);
        assert_eq!(window.height, 128);
        assert_eq!(window.fps, 60);
        assert_eq!(window.title, "Pong");
        assert_eq!(window.quit, Control::KeyEscape);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Pong::from_variant(Variant::Quick, 77).unwrap();
        let mut b = Pong::from_variant(Variant::Quick, 77).unwrap();
        assert_eq!(a.seed(), 77);
        let controls: HeldControls = [Control::KeyW, Control::KeyDown].into_iter().collect();
        for _ in 0..3000 {
            a.update(&controls);
            b.update(&controls);
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_run_stops_on_quit() {
        let mut pong = Pong::from_variant(Variant::Classic, 3).unwrap();
        let mut script = vec![HeldControls::new(); 10];
        script.push([Control::KeyEscape].into_iter().collect());
        let mut host = HeadlessHost::scripted(script);

        let frames = run(&mut pong, &mut host).unwrap();
        assert_eq!(frames, 10);
        assert_eq!(pong.state().frame, 10);
        assert!(!host.last_frame().is_empty());
    }

    #[test]
    fn test_run_start_screen() {
        let mut pong = Pong::from_variant(Variant::StartScreen, 3).unwrap();
        let mut script = vec![HeldControls::new(); 5];
        script.push([Control::KeyEnter].into_iter().collect());
        script.extend(vec![HeldControls::new(); 5]);
        let mut host = HeadlessHost::scripted(script);

        let frames = run(&mut pong, &mut host).unwrap();
        assert_eq!(frames, 11);
        assert_eq!(pong.state().phase, GamePhase::Playing);
        assert_eq!(pong.state().frame, 5);
    }

    #[test]
    fn test_run_init_failure() {
        let mut pong = Pong::from_variant(Variant::Classic, 3).unwrap();
        let mut host = HeadlessHost::failing("no display");
        assert!(matches!(run(&mut pong, &mut host), Err(HostError::Init(_))));
    }
}
