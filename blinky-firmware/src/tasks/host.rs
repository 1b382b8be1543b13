//! Host link task
//!
//! Reads 8-byte request packets from the UART, runs them through the
//! device and writes the response back. Requests are handled strictly in
//! arrival order; unknown commands get no reply.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io_async::{Read, ReadExactError, Write};

use blinky_core::CommandError;
use blinky_hal_rp2040::UsbBootloader;
use blinky_protocol::{Command, Packet, PACKET_SIZE};

use crate::device::DEVICE;

/// Host task - serves host commands
#[embassy_executor::task]
pub async fn host_task(mut rx: BufferedUartRx, mut tx: BufferedUartTx) {
    info!("Host task started");

    loop {
        let mut request: Packet = [0; PACKET_SIZE];
        match rx.read_exact(&mut request).await {
            Ok(()) => {}
            Err(ReadExactError::UnexpectedEof) => {
                warn!("Host link closed mid-packet");
                continue;
            }
            Err(ReadExactError::Other(e)) => {
                warn!("UART read error: {:?}", e);
                continue;
            }
        }

        trace!("RX: {:02x}", request);

        if Command::from_byte(request[0]) == Some(Command::Bootloader) {
            info!("Entering USB bootloader");
        }

        let mut response: Packet = [0; PACKET_SIZE];
        let result = DEVICE.with(|device| {
            let result = device.handle_command(&mut UsbBootloader, &request, &mut response);
            let fault = device.store_mut().storage_mut().take_error();
            (result, fault)
        });

        let command = match result {
            Some((Ok(command), None)) => command,
            Some((Ok(command), Some(e))) => {
                error!("Settings write failed during {:?}: {:?}", command, e);
                defmt::panic!("Settings storage fault");
            }
            Some((Err(CommandError::UnknownCommand(id)), _)) => {
                warn!("Unknown command {=u8:#x}, no reply", id);
                continue;
            }
            None => {
                warn!("Command before device init");
                continue;
            }
        };

        debug!("Handled {:?}", command);
        match command {
            Command::Trigger => info!("Blink triggered"),
            Command::TurnOff => info!("Blink turned off by host"),
            Command::SaveSettings => info!("Settings saved"),
            _ => {}
        }

        if let Err(e) = tx.write_all(&response).await {
            warn!("Failed to send response: {:?}", e);
        }
    }
}
