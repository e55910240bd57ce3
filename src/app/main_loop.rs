use std::time::Duration;

use ratatui::DefaultTerminal;

use super::App;
use crate::app::event_handlers::EventHandlers;
use crate::app::init::AppInit;
use crate::app::spotify::PlaybackApi;

/// How long to wait for keyboard input before redrawing (in milliseconds)
const EVENT_POLL_INTERVAL_MS: u64 = 100;

/// Trait for main application loop
pub trait AppMainLoop {
    async fn run(self, terminal: DefaultTerminal) -> color_eyre::Result<()>
    where
        Self: Sized;
}

impl<A: PlaybackApi> AppMainLoop for App<A> {
    /// Run the application's main loop.
    async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        self.initialize().await?;

        log::info!("Entering main loop");

        while self.running {
            terminal.draw(|frame| crate::app::ui::render(frame, &mut self))?;

            if crossterm::event::poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                self.handle_crossterm_events().await?;
            }
        }

        log::info!("Exiting main loop");

        Ok(())
    }
}
