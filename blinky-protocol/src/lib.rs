//! Blinky Host Command Protocol
//!
//! This crate defines the packet format exchanged between the host software
//! and the indicator. The transport (USB HID reports, a UART, ...) delivers
//! whole packets; this crate never sees partial data.
//!
//! # Protocol Overview
//!
//! Requests and responses are fixed 8-byte packets:
//! ```text
//! ┌────┬───────────────────────────────┬──────┐
//! │ ID │ PAYLOAD                       │ SYNC │
//! │ 1B │ 6B                            │ 1B   │
//! └────┴───────────────────────────────┴──────┘
//! ```
//!
//! The response echoes the command id in byte 0. When the protocol revision
//! carries a sync byte, it is copied verbatim from request to response so the
//! host can match replies to requests.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod options;
pub mod packet;

pub use command::{Command, HostCommand, ProtocolError};
pub use options::TriggerOptions;
pub use packet::{Packet, Response, Revision, SyncCounter, PACKET_SIZE, PAYLOAD_SIZE, SYNC_INDEX};
