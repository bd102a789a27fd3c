use crate::consts::{
    LONG_FLASH_OFF_MS, LONG_FLASH_ON_MS, MEDIUM_FLASH_OFF_MS, MEDIUM_FLASH_ON_MS,
    SHORT_FLASH_OFF_MS, SHORT_FLASH_ON_MS,
};
use crate::error::FlashError;
use std::time::Duration;
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashTier {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashTiming {
    pub on_ms: u16,
    pub off_ms: u16,
}

impl FlashTier {
    pub const ALL: [Self; 3] = [Self::Short, Self::Medium, Self::Long];

    pub fn timing(self) -> FlashTiming {
        match self {
            Self::Short => FlashTiming {
                on_ms: SHORT_FLASH_ON_MS,
                off_ms: SHORT_FLASH_OFF_MS,
            },
            Self::Medium => FlashTiming {
                on_ms: MEDIUM_FLASH_ON_MS,
                off_ms: MEDIUM_FLASH_OFF_MS,
            },
            Self::Long => FlashTiming {
                on_ms: LONG_FLASH_ON_MS,
                off_ms: LONG_FLASH_OFF_MS,
            },
        }
    }
}

impl FlashTiming {
    pub fn on(&self) -> Duration {
        Duration::from_millis(self.on_ms.into())
    }

    pub fn off(&self) -> Duration {
        Duration::from_millis(self.off_ms.into())
    }

    pub fn period(&self) -> Duration {
        self.on() + self.off()
    }

    /// Narrows to `(on, off)` for 8-bit consumers, failing on values above 255.
    pub fn to_u8_ms(&self) -> Result<(u8, u8), FlashError> {
        let narrow =
            |value: u16| u8::try_from(value).map_err(|_| FlashError::OutOfRange { value });
        Ok((narrow(self.on_ms)?, narrow(self.off_ms)?))
    }

    /// The values an 8-bit store silently ends up with (mod 256).
    pub fn wrapped_u8_ms(&self) -> (u8, u8) {
        (self.on_ms as u8, self.off_ms as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashRequest {
    pub tier: FlashTier,
    pub count: u8,
}

impl FlashRequest {
    pub fn once(tier: FlashTier) -> Self {
        Self { tier, count: 1 }
    }
}

/// Anything that can be switched on and off by the flasher.
pub trait Light {
    fn set(&mut self, on: bool);
}

/// Plays `request` on `light`. The light is off when this returns.
#[tracing::instrument(level = "trace", skip(light))]
pub async fn flash<L: Light>(light: &mut L, request: FlashRequest) {
    let timing = request.tier.timing();
    for _ in 0..request.count {
        light.set(true);
        tokio::time::sleep(timing.on()).await;
        light.set(false);
        tokio::time::sleep(timing.off()).await;
    }
}

/// Plays `request` unless shutdown is signalled first. Returns `false` when
/// cut short. The light is off either way.
pub async fn flash_until_shutdown<L: Light>(
    light: &mut L,
    request: FlashRequest,
    shutdown: &mut watch::Receiver<bool>,
) -> bool {
    if *shutdown.borrow() {
        light.set(false);
        return false;
    }
    let finished = tokio::select! {
        _ = flash(light, request) => true,
        _ = shutdown.changed() => false,
    };
    if !finished {
        debug!("{request:?} interrupted by shutdown");
        light.set(false);
    }
    finished
}

pub struct Flasher<L> {
    light: L,
    requests: Receiver<FlashRequest>,
    shutdown: watch::Receiver<bool>,
}

impl<L: Light> Flasher<L> {
    pub fn new(
        light: L,
        requests: Receiver<FlashRequest>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            light,
            requests,
            shutdown,
        }
    }

    /// Plays requests in arrival order until the channel closes or shutdown
    /// is signalled. Hands the light back, switched off.
    pub async fn run(mut self) -> L {
        while !*self.shutdown.borrow() {
            tokio::select! {
                _ = self.shutdown.changed() => break,
                request = self.requests.recv() => {
                    let Some(request) = request else {
                        debug!("Flash request channel closed");
                        break;
                    };
                    debug!("Playing {request:?}");
                    if !flash_until_shutdown(&mut self.light, request, &mut self.shutdown).await {
                        break;
                    }
                }
            }
        }
        info!("Flasher stopped");
        self.light.set(false);
        self.light
    }
}
