//! Blinky - USB Notification Indicator Firmware
//!
//! Main firmware binary for RP2040-based indicators. Blinks an RGB light
//! when the host asks for attention, stops on a touch or after a timeout
//! and keeps its settings in flash.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::Pwm;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use blinky_core::{BlinkScheduler, Device, DisplayDriver, SettingsStore};
use blinky_drivers::TouchSensor;
use blinky_hal_rp2040::{
    settings_storage, AuxOutput, EdgeGate, LevelInput, Rp2040RgbPwm, TickGate,
};

use crate::board::{PROTOCOL_REVISION, TOUCH_ACTIVE_LOW, UART_BAUD, UART_BUF_SIZE};
use crate::device::{DEVICE, EDGE_GATE, TICK_GATE, TOUCH_LEVEL};

mod board;
mod device;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Blinky firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Settings page in the last flash sector
    let storage = unwrap!(settings_storage(p.FLASH));

    // RGB outputs: red/green on slice 0, blue on slice 1
    let red_green = Pwm::new_output_ab(p.PWM_SLICE0, p.PIN_16, p.PIN_17, Rp2040RgbPwm::config());
    let blue = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_18, Rp2040RgbPwm::config());
    let display = DisplayDriver::new(Rp2040RgbPwm::new(red_green, blue));

    let aux = AuxOutput::new(Output::new(p.PIN_19, Level::Low));
    let touch_pin = Input::new(p.PIN_15, Pull::Down);
    let touch = TouchSensor::new(LevelInput::new(&TOUCH_LEVEL), TOUCH_ACTIVE_LOW);

    let scheduler = BlinkScheduler::new(
        TickGate::new(&TICK_GATE),
        EdgeGate::new(&EDGE_GATE),
        touch,
        display,
        aux,
    );
    let mut device = Device::new(SettingsStore::new(storage), scheduler, PROTOCOL_REVISION);

    let state = device.store_mut().state();
    let color = device.settings().color;
    info!(
        "Settings loaded: {:?}, color=({}, {}, {}), interval={}, timeout={}",
        state,
        color.r,
        color.g,
        color.b,
        device.settings().blink_interval,
        device.settings().blink_timeout
    );

    DEVICE.init(device);

    // Host link
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = UART_BAUD;

    let tx_buf = TX_BUF.init([0u8; UART_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; UART_BUF_SIZE]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for host communication");

    // Spawn tasks
    unwrap!(spawner.spawn(tasks::tick_task()));
    unwrap!(spawner.spawn(tasks::touch_task(touch_pin)));
    unwrap!(spawner.spawn(tasks::host_task(rx, tx)));

    info!("All tasks spawned, firmware running");
}
