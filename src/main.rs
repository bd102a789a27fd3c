use crate::drum::DrumId;
use crate::flash::{FlashRequest, FlashTier, Flasher, Light};
use crate::led::PadLed;
use crate::pad::PadSensor;
use std::error::Error;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod consts;
mod drum;
mod error;
mod flash;
mod led;
mod pad;

#[cfg(feature = "debug")]
const DEFAULT_LOG_FILTER: &str = "debug";
#[cfg(not(feature = "debug"))]
const DEFAULT_LOG_FILTER: &str = "info";

fn init_tracing() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(writer)
        .init();
    guard
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _guard = init_tracing();
    let drum = DrumId::CURRENT;
    info!("Starting {drum} drum");
    for tier in FlashTier::ALL {
        let timing = tier.timing();
        if let Err(error) = timing.to_u8_ms() {
            let (on, off) = timing.wrapped_u8_ms();
            warn!("{tier:?} flash: {error}, an 8-bit build would use {on}/{off} ms");
        }
    }

    // SIGINT must be caught before the LED can light
    let mut sigint = signal(SignalKind::interrupt())?;
    let (request_tx, request_rx) = mpsc::channel::<FlashRequest>(consts::FLASH_CHANNEL_DEPTH);
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
    let shutdown_signal_task = tokio::spawn(async move {
        if sigint.recv().await.is_none() {
            error!("Ctrl+C listener closed");
        }
        info!("Shutting down...");
        let _ = shutdown_tx.send(true);
    });

    let mut led = PadLed::init(drum)?;
    let ready = FlashRequest::once(FlashTier::Long);
    info!("Ready flash, {} ms", ready.tier.timing().period().as_millis());
    if !flash::flash_until_shutdown(&mut led, ready, &mut shutdown_rx).await {
        info!("Shut down during ready flash");
        return Ok(());
    }

    let _pad = PadSensor::watch(drum, request_tx)?;
    let flasher_task = tokio::spawn(Flasher::new(led, request_rx, shutdown_rx).run());

    let (flasher, _) = tokio::join!(flasher_task, shutdown_signal_task);
    flasher?.set(false);
    Ok(())
}
