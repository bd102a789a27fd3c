use crate::consts::{LED_FULL_BRIGHTNESS, LED_PWM_FREQUENCY};
use crate::drum::{DrumId, LedWiring};
use crate::flash::Light;
use rppal::{gpio, pwm};
use std::error::Error;
use tracing::{debug, error};

#[derive(Debug)]
enum Output {
    Gpio(gpio::OutputPin),
    Pwm(pwm::Pwm),
}

/// The LED under a drum pad.
#[derive(Debug)]
pub struct PadLed {
    drum: DrumId,
    output: Output,
}

impl PadLed {
    pub fn init(drum: DrumId) -> Result<PadLed, Box<dyn Error>> {
        debug!("Initializing {drum} led");
        let output = match drum.led_wiring() {
            LedWiring::Pwm(channel) => Output::Pwm(pwm::Pwm::with_frequency(
                channel,
                LED_PWM_FREQUENCY,
                0.0,
                pwm::Polarity::Normal,
                false,
            )?),
            LedWiring::Gpio(pin) => {
                let mut pin = gpio::Gpio::new()?.get(pin)?.into_output();
                pin.set_pwm_frequency(LED_PWM_FREQUENCY, 0.0)?;
                Output::Gpio(pin)
            }
        };
        debug!("{drum} led ready");
        Ok(PadLed { drum, output })
    }

    #[tracing::instrument(level = "trace", skip(self), fields(drum = %self.drum))]
    pub fn set_brightness(&mut self, duty: f64) {
        if let Err(error) = self.output.drive(duty) {
            error!("Failed to drive {} LED at duty {duty}: {error}", self.drum);
        }
    }
}

impl Output {
    fn drive(&mut self, duty: f64) -> Result<(), Box<dyn Error>> {
        match self {
            Output::Gpio(pin) => pin.set_pwm_frequency(LED_PWM_FREQUENCY, duty)?,
            Output::Pwm(channel) => {
                channel.set_duty_cycle(duty)?;
                if !channel.is_enabled()? {
                    channel.enable()?;
                }
            }
        }
        Ok(())
    }
}

impl Light for PadLed {
    fn set(&mut self, on: bool) {
        self.set_brightness(if on { LED_FULL_BRIGHTNESS } else { 0.0 });
    }
}
