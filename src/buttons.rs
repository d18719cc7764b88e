//! The jump button: A on the badge, active low with the internal pull-up.

use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::gpio::{
    Input,
    InputConfig,
    Pull,
};

use crate::{
    ButtonResources,
    latch::ButtonLatch,
};

const DEBOUNCE: Duration = Duration::from_millis(20);

pub struct JumpButton {
    pin: Input<'static>,
}

impl From<ButtonResources<'static>> for JumpButton {
    fn from(res: ButtonResources<'static>) -> Self {
        Self {
            pin: Input::new(res.jump, InputConfig::default().with_pull(Pull::Up)),
        }
    }
}

impl JumpButton {
    /// Wait for a debounced press (falling edge).
    pub async fn debounce_press(&mut self) {
        loop {
            self.pin.wait_for_falling_edge().await;
            Timer::after(DEBOUNCE).await;
            if self.pin.is_low() {
                return;
            }
        }
    }

    /// Wait for a debounced release (rising edge).
    pub async fn debounce_release(&mut self) {
        loop {
            self.pin.wait_for_rising_edge().await;
            Timer::after(DEBOUNCE).await;
            if self.pin.is_high() {
                return;
            }
        }
    }

    /// Post one latch press per physical press, forever.
    ///
    /// Holding the button does not auto-repeat; the next press only counts
    /// after a debounced release.
    pub async fn forward_presses(&mut self, latch: &ButtonLatch) -> ! {
        loop {
            self.debounce_press().await;
            latch.press();
            debug!("jump button pressed");
            self.debounce_release().await;
        }
    }
}
