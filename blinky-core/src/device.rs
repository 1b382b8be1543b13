//! Device aggregate and host command dispatch
//!
//! Owns the settings store and the scheduler. Host requests arrive as raw
//! 8-byte packets and are answered in place; tick and touch events are
//! forwarded to the scheduler.

use blinky_hal::{Bootloader, ByteStorage, EdgeWatch, OutputPin, RgbPwm, TickSource};
use blinky_protocol::{
    Command, HostCommand, Packet, ProtocolError, Response, Revision, SYNC_INDEX,
};

use crate::color::Color;
use crate::scheduler::{BlinkScheduler, State};
use crate::settings::{Settings, SettingsStore};
use crate::status::DeviceStatus;
use crate::traits::TouchInput;

/// Errors reported by the command dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Byte 0 of the request is not a known command id
    UnknownCommand(u8),
}

impl From<ProtocolError> for CommandError {
    fn from(e: ProtocolError) -> Self {
        match e {
            ProtocolError::UnknownCommand(id) => CommandError::UnknownCommand(id),
        }
    }
}

/// The notification device
pub struct Device<S, T, W, I, P, A> {
    store: SettingsStore<S>,
    scheduler: BlinkScheduler<T, W, I, P, A>,
    revision: Revision,
}

impl<S, T, W, I, P, A> Device<S, T, W, I, P, A>
where
    S: ByteStorage,
    T: TickSource,
    W: EdgeWatch,
    I: TouchInput,
    P: RgbPwm,
    A: OutputPin,
{
    /// Load the settings and prepare the display with the stored color
    pub fn new(
        mut store: SettingsStore<S>,
        mut scheduler: BlinkScheduler<T, W, I, P, A>,
        revision: Revision,
    ) -> Self {
        let settings = store.load();
        scheduler.display_mut().set_color(settings.color);

        Self {
            store,
            scheduler,
            revision,
        }
    }

    /// Handle one host request
    ///
    /// Recognized commands overwrite the whole response: unused payload
    /// bytes are zero and byte 7 is the request's sync byte, or zero when
    /// the revision has none. Unknown commands echo the id, zero bytes 1..=6, leave the
    /// sync byte alone and return an error. `Bootloader` never returns.
    pub fn handle_command<B: Bootloader>(
        &mut self,
        bootloader: &mut B,
        request: &Packet,
        response: &mut Packet,
    ) -> Result<Command, CommandError> {
        let command = match HostCommand::decode(request) {
            Ok(command) => command,
            Err(e) => {
                // Byte 7 is left as the caller had it
                let kept = response[SYNC_INDEX];
                Response::echo(request[0]).encode(response, Some(kept));
                return Err(e.into());
            }
        };
        let id = command.command().to_byte();

        let reply = match command {
            HostCommand::Trigger(options) => {
                let settings = *self.store.settings();
                self.scheduler.enable(options, &settings);
                Response::echo(id)
            }
            HostCommand::SetSettings {
                r,
                g,
                b,
                interval,
                timeout,
            } => {
                self.set_settings(Color::new(r, g, b), interval, timeout);
                Response::echo(id)
            }
            HostCommand::GetSettings => {
                let s = self.store.settings();
                Response::with_data(
                    id,
                    &[s.color.r, s.color.g, s.color.b, s.blink_interval, s.blink_timeout],
                )
            }
            HostCommand::SaveSettings => {
                self.store.save();
                self.scheduler.disable();
                Response::echo(id)
            }
            HostCommand::ResetSettings => {
                let before = self.store.settings().color;
                self.store.clear();
                self.push_color_if_changed(before);
                Response::echo(id)
            }
            HostCommand::Bootloader => {
                self.scheduler.disable();
                bootloader.enter()
            }
            HostCommand::TurnOff => {
                self.scheduler.disable();
                Response::echo(id)
            }
            HostCommand::Ping => {
                let status = self.scheduler.status().bits();
                let state = self.store.state().as_u8();
                Response::with_data(id, &[status, state])
            }
        };

        reply.encode(response, self.revision.sync_of(request));
        Ok(command.command())
    }

    /// Forward a tick to the scheduler
    pub fn on_tick(&mut self) -> State {
        self.scheduler.on_tick()
    }

    /// Forward a touch edge to the scheduler
    pub fn on_touch_edge(&mut self) -> State {
        self.scheduler.on_touch_edge()
    }

    /// Working settings
    pub fn settings(&self) -> &Settings {
        self.store.settings()
    }

    /// Status bits
    pub fn status(&self) -> DeviceStatus {
        self.scheduler.status()
    }

    /// The scheduler
    pub fn scheduler(&self) -> &BlinkScheduler<T, W, I, P, A> {
        &self.scheduler
    }

    /// The settings store
    pub fn store(&self) -> &SettingsStore<S> {
        &self.store
    }

    /// Mutable access to the settings store
    pub fn store_mut(&mut self) -> &mut SettingsStore<S> {
        &mut self.store
    }

    fn set_settings(&mut self, color: Color, interval: u8, timeout: u8) {
        let before = self.store.settings().color;

        let working = self.store.settings_mut();
        working.color = color;
        working.blink_interval = interval;
        working.blink_timeout = timeout;

        self.push_color_if_changed(before);
    }

    fn push_color_if_changed(&mut self, before: Color) {
        let color = self.store.settings().color;
        if color != before {
            self.scheduler.set_color(color);
        }
    }
}
