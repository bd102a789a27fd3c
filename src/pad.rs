use crate::consts::PAD_DEBOUNCE_MS;
use crate::drum::DrumId;
use crate::flash::{FlashRequest, FlashTier};
use rppal::gpio::{Event, Gpio, InputPin, Trigger};
use std::error::Error;
use std::time::Duration;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::mpsc::Sender;
use tracing::{debug, trace, warn};

/// Hit sensor of a drum pad. Interrupts stop when this is dropped.
pub struct PadSensor {
    _pin: InputPin,
}

impl PadSensor {
    pub fn watch(drum: DrumId, tx: Sender<FlashRequest>) -> Result<PadSensor, Box<dyn Error>> {
        debug!("Watching {drum} pad on pin {}", drum.pad_pin());
        let mut pin = Gpio::new()?.get(drum.pad_pin())?.into_input_pullup();
        pin.set_async_interrupt(
            Trigger::FallingEdge,
            Some(Duration::from_millis(PAD_DEBOUNCE_MS)),
            move |event: Event| {
                trace!("{drum} hit: {event:?}");
                on_hit(&tx);
            },
        )?;
        Ok(PadSensor { _pin: pin })
    }
}

// Runs on the interrupt thread, so it must never block.
fn on_hit(tx: &Sender<FlashRequest>) {
    match tx.try_send(FlashRequest::once(FlashTier::Short)) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => warn!("Flash queue full, dropping hit"),
        Err(TrySendError::Closed(_)) => debug!("Flasher gone, ignoring hit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn hit_queues_one_short_flash() {
        let (tx, mut rx) = mpsc::channel(2);
        on_hit(&tx);
        assert_eq!(rx.try_recv(), Ok(FlashRequest::once(FlashTier::Short)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn hits_beyond_queue_depth_are_dropped() {
        let (tx, mut rx) = mpsc::channel(1);
        on_hit(&tx);
        on_hit(&tx);
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn hit_after_flasher_exit_is_ignored() {
        let (tx, mut rx) = mpsc::channel(1);
        rx.close();
        on_hit(&tx);
        assert!(tx.is_closed());
        assert!(rx.try_recv().is_err());
    }
}
