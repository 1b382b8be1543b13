//! Mock hardware shared by the integration tests

#![allow(dead_code)]

use core::cell::Cell;

use blinky_core::scheduler::REFERENCE_TICKS_PER_SECOND;
use blinky_core::traits::TouchInput;
use blinky_core::{BlinkScheduler, Device, DisplayDriver, SettingsStore};
use blinky_hal::storage::ERASED_BYTE;
use blinky_hal::{Bootloader, ByteStorage, Channel, EdgeWatch, OutputPin, RgbPwm, TickSource};
use blinky_protocol::Revision;

/// EEPROM-like storage
pub struct MockStorage {
    pub bytes: [u8; 32],
    pub writes: usize,
}

impl MockStorage {
    pub fn erased() -> Self {
        Self {
            bytes: [ERASED_BYTE; 32],
            writes: 0,
        }
    }

    pub fn with_record(record: [u8; 8]) -> Self {
        let mut storage = Self::erased();
        storage.bytes[..8].copy_from_slice(&record);
        storage
    }
}

impl ByteStorage for MockStorage {
    fn read_block(&mut self, offset: u16, buffer: &mut [u8]) {
        let start = offset as usize;
        buffer.copy_from_slice(&self.bytes[start..start + buffer.len()]);
    }

    fn write_block(&mut self, offset: u16, data: &[u8]) {
        let start = offset as usize;
        self.bytes[start..start + data.len()].copy_from_slice(data);
        self.writes += 1;
    }
}

#[derive(Default)]
pub struct MockTicks {
    pub running: bool,
}

impl TickSource for MockTicks {
    const TICKS_PER_SECOND: u8 = REFERENCE_TICKS_PER_SECOND;

    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

#[derive(Default)]
pub struct MockWatch {
    pub armed: bool,
}

impl EdgeWatch for MockWatch {
    fn arm(&mut self) {
        self.armed = true;
    }

    fn disarm(&mut self) {
        self.armed = false;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Touch sensor whose level is controlled by the test
pub struct MockTouch<'a>(pub &'a Cell<bool>);

impl TouchInput for MockTouch<'_> {
    fn is_touched(&self) -> bool {
        self.0.get()
    }
}

#[derive(Default)]
pub struct MockPwm {
    pub duty: [u8; 3],
    pub enabled: [bool; 3],
}

impl MockPwm {
    /// Duty of every driven channel, zero for released ones
    pub fn lit(&self) -> [u8; 3] {
        let mut out = [0; 3];
        for i in 0..3 {
            if self.enabled[i] {
                out[i] = self.duty[i];
            }
        }
        out
    }
}

impl RgbPwm for MockPwm {
    fn set_duty(&mut self, channel: Channel, duty: u8) {
        self.duty[channel as usize] = duty;
    }

    fn enable_output(&mut self, channel: Channel) {
        self.enabled[channel as usize] = true;
    }

    fn disable_output(&mut self, channel: Channel) {
        self.enabled[channel as usize] = false;
    }

    fn is_output_enabled(&self, channel: Channel) -> bool {
        self.enabled[channel as usize]
    }
}

#[derive(Default)]
pub struct MockPin {
    pub high: bool,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Bootloader that unwinds instead of jumping
pub struct MockBootloader;

impl Bootloader for MockBootloader {
    fn enter(&mut self) -> ! {
        panic!("bootloader entered");
    }
}

pub type TestDevice<'a> =
    Device<MockStorage, MockTicks, MockWatch, MockTouch<'a>, MockPwm, MockPin>;

pub fn device(storage: MockStorage, touch: &Cell<bool>) -> TestDevice<'_> {
    device_with_revision(storage, touch, Revision::Synced)
}

pub fn device_with_revision(
    storage: MockStorage,
    touch: &Cell<bool>,
    revision: Revision,
) -> TestDevice<'_> {
    let scheduler = BlinkScheduler::new(
        MockTicks::default(),
        MockWatch::default(),
        MockTouch(touch),
        DisplayDriver::new(MockPwm::default()),
        MockPin::default(),
    );
    Device::new(SettingsStore::new(storage), scheduler, revision)
}
