use super::App;
use crate::app::events::{AppEvent, PlayerAction, action_for_key};
use crate::app::navigation::Navigation;
use crate::app::playback::PlaybackControls;
use crate::app::spotify::PlaybackApi;

/// Trait for event handling
pub trait EventHandlers {
    async fn handle_crossterm_events(&mut self) -> color_eyre::Result<()>;
    async fn on_app_event(&mut self, event: AppEvent) -> color_eyre::Result<()>;
    fn quit(&mut self);
}

impl<A: PlaybackApi> EventHandlers for App<A> {
    /// Reads the crossterm events and updates the state of [`App`].
    async fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if let Some(event) = AppEvent::from_crossterm(crossterm::event::read()?) {
            self.on_app_event(event).await?;
        }
        Ok(())
    }

    /// Dispatch one filtered event into the state machine.
    async fn on_app_event(&mut self, event: AppEvent) -> color_eyre::Result<()> {
        match event {
            AppEvent::Quit => self.quit(),
            // The next draw reads the new frame size; nothing to update.
            AppEvent::Resize(_, _) => {}
            AppEvent::Key(code) => {
                if let Some(action) = action_for_key(code) {
                    log::debug!("Key action: {}", action);
                    let step = self.config.spotify.volume_step as i16;
                    match action {
                        PlayerAction::FocusToggle => self.toggle_focus(),
                        PlayerAction::CursorUp => self.cursor_up(),
                        PlayerAction::CursorDown => self.cursor_down(),
                        PlayerAction::TogglePlayPause => self.toggle_play_pause().await,
                        PlayerAction::VolumeUp => self.adjust_volume(step).await,
                        PlayerAction::VolumeDown => self.adjust_volume(-step).await,
                        PlayerAction::Select => self.select().await,
                    }
                }
            }
        }
        Ok(())
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
