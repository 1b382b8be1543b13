//! Host commands
//!
//! Byte 0 of a request selects the command; bytes 1..=6 carry its
//! arguments.

use crate::options::TriggerOptions;
use crate::packet::{Packet, PACKET_SIZE, SYNC_INDEX};

// Command ids
const CMD_TRIGGER: u8 = 1;
const CMD_SET_SETTINGS: u8 = 2;
const CMD_GET_SETTINGS: u8 = 3;
const CMD_SAVE_SETTINGS: u8 = 4;
const CMD_RESET_SETTINGS: u8 = 5;
const CMD_BOOTLOADER: u8 = 6;
const CMD_TURN_OFF: u8 = 7;
const CMD_PING: u8 = 8;

/// Errors when decoding a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// Byte 0 is not a known command id
    UnknownCommand(u8),
}

/// Command identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// Start the blink pattern
    Trigger = CMD_TRIGGER,
    /// Replace the working settings
    SetSettings = CMD_SET_SETTINGS,
    /// Read the working settings
    GetSettings = CMD_GET_SETTINGS,
    /// Persist the working settings
    SaveSettings = CMD_SAVE_SETTINGS,
    /// Reset the working settings to defaults
    ResetSettings = CMD_RESET_SETTINGS,
    /// Jump to the bootloader
    Bootloader = CMD_BOOTLOADER,
    /// Stop a running blink pattern
    TurnOff = CMD_TURN_OFF,
    /// Heartbeat and status query
    Ping = CMD_PING,
}

impl Command {
    /// Parse a command id
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_TRIGGER => Some(Command::Trigger),
            CMD_SET_SETTINGS => Some(Command::SetSettings),
            CMD_GET_SETTINGS => Some(Command::GetSettings),
            CMD_SAVE_SETTINGS => Some(Command::SaveSettings),
            CMD_RESET_SETTINGS => Some(Command::ResetSettings),
            CMD_BOOTLOADER => Some(Command::Bootloader),
            CMD_TURN_OFF => Some(Command::TurnOff),
            CMD_PING => Some(Command::Ping),
            _ => None,
        }
    }

    /// Wire id of this command
    pub fn to_byte(self) -> u8 {
        self as u8
    }
}

/// A decoded request with its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostCommand {
    /// Start blinking with the given cancellation options
    Trigger(TriggerOptions),
    /// Set color, blink interval (ticks) and encoded timeout
    SetSettings {
        r: u8,
        g: u8,
        b: u8,
        interval: u8,
        timeout: u8,
    },
    /// Read back the working settings
    GetSettings,
    /// Persist the working settings and stop blinking
    SaveSettings,
    /// Reset the working settings to defaults
    ResetSettings,
    /// Jump to the bootloader
    Bootloader,
    /// Stop blinking
    TurnOff,
    /// Heartbeat
    Ping,
}

impl HostCommand {
    /// Decode a request packet
    pub fn decode(packet: &Packet) -> Result<Self, ProtocolError> {
        let id = packet[0];
        let command = Command::from_byte(id).ok_or(ProtocolError::UnknownCommand(id))?;

        Ok(match command {
            Command::Trigger => HostCommand::Trigger(TriggerOptions::from_bits(packet[1])),
            Command::SetSettings => HostCommand::SetSettings {
                r: packet[1],
                g: packet[2],
                b: packet[3],
                interval: packet[4],
                timeout: packet[5],
            },
            Command::GetSettings => HostCommand::GetSettings,
            Command::SaveSettings => HostCommand::SaveSettings,
            Command::ResetSettings => HostCommand::ResetSettings,
            Command::Bootloader => HostCommand::Bootloader,
            Command::TurnOff => HostCommand::TurnOff,
            Command::Ping => HostCommand::Ping,
        })
    }

    /// Command id of this request
    pub fn command(&self) -> Command {
        match self {
            HostCommand::Trigger(_) => Command::Trigger,
            HostCommand::SetSettings { .. } => Command::SetSettings,
            HostCommand::GetSettings => Command::GetSettings,
            HostCommand::SaveSettings => Command::SaveSettings,
            HostCommand::ResetSettings => Command::ResetSettings,
            HostCommand::Bootloader => Command::Bootloader,
            HostCommand::TurnOff => Command::TurnOff,
            HostCommand::Ping => Command::Ping,
        }
    }

    /// Build the request packet as the host sends it
    pub fn encode(&self, sync: u8) -> Packet {
        let mut packet = [0u8; PACKET_SIZE];
        packet[0] = self.command().to_byte();

        match *self {
            HostCommand::Trigger(options) => packet[1] = options.bits(),
            HostCommand::SetSettings {
                r,
                g,
                b,
                interval,
                timeout,
            } => {
                packet[1..6].copy_from_slice(&[r, g, b, interval, timeout]);
            }
            _ => {}
        }

        packet[SYNC_INDEX] = sync;
        packet
    }
}
