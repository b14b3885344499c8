use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::defs::{ConfigBit, DataReadyBit, DEFAULT_ADDR, ENABLE_ALL};
use crate::{Error, Reg, ZxSensor};

/// Which data-ready categories assert the DR line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum InterruptTrigger {
  /// No category asserts DR; the master enable is cleared as well.
  None,
  /// Continuous X/Z position samples.
  Position,
  /// Swipe gestures.
  Gesture,
  /// Every defined category.
  All,
}

/// How the DR line behaves once a trigger fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct SignalPolicy {
  /// DR idles low and asserts high when set, the inverse when clear.
  pub active_high: bool,
  /// DR emits a short pulse when set; when clear it stays asserted until the
  /// STATUS register is read.
  pub pin_pulse: bool,
}

impl SignalPolicy {
  pub const fn new(active_high: bool, pin_pulse: bool) -> Self {
    Self { active_high, pin_pulse }
  }

  /// Active-high, level until acknowledged. What the interrupt examples use.
  pub const fn active_high() -> Self {
    Self::new(true, false)
  }

  pub const fn active_low() -> Self {
    Self::new(false, false)
  }

  pub const fn pulsed(mut self) -> Self {
    self.pin_pulse = true;
    self
  }
}

impl Default for SignalPolicy {
  fn default() -> Self {
    Self::active_high()
  }
}

/// Staged sensor configuration, transmitted by [`ZxSensor::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct Config {
  /// 7-bit bus address of the sensor.
  pub address: SevenBitAddress,
  pub trigger: InterruptTrigger,
  pub signal: SignalPolicy,
}

impl Config {
  pub const fn new(address: SevenBitAddress, trigger: InterruptTrigger, signal: SignalPolicy) -> Self {
    Self { address, trigger, signal }
  }

  pub const fn with_address(mut self, address: SevenBitAddress) -> Self {
    self.address = address;
    self
  }

  pub const fn with_trigger(mut self, trigger: InterruptTrigger) -> Self {
    self.trigger = trigger;
    self
  }

  pub const fn with_signal(mut self, signal: SignalPolicy) -> Self {
    self.signal = signal;
    self
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new(DEFAULT_ADDR, InterruptTrigger::None, SignalPolicy::active_high())
  }
}

impl<I, E, DR> ZxSensor<I, DR>
where
  I: I2c<SevenBitAddress, Error = E>,
  DR: Wait,
{
  /// Reconfigure the interrupt policy and re-transmit it to the device.
  ///
  /// A failure part-way through leaves the device partially configured; the
  /// caller must treat it as unconfigured and may retry the whole call.
  pub async fn set_interrupt_config(&mut self, trigger: InterruptTrigger, signal: SignalPolicy) -> Result<(), Error<E>> {
    self.config.trigger = trigger;
    self.config.signal = signal;
    self.apply_interrupt_config().await
  }

  pub(crate) async fn apply_interrupt_config(&mut self) -> Result<(), Error<E>> {
    // Trigger selection
    match self.config.trigger {
      InterruptTrigger::None => self.write_byte(Reg::DataReadyEnable, 0x00).await?,
      InterruptTrigger::Position => self.set_bit(Reg::DataReadyEnable, DataReadyBit::Position).await?,
      InterruptTrigger::Gesture => {
        // The chip needs all three of these for gesture interrupts; leaving
        // any one out disables part of the gesture engine.
        self.set_bit(Reg::DataReadyEnable, DataReadyBit::Swipe).await?;
        self.set_bit(Reg::DataReadyEnable, DataReadyBit::Hover).await?;
        self.set_bit(Reg::DataReadyEnable, DataReadyBit::HoverGesture).await?;
      }
      InterruptTrigger::All => self.set_bits(Reg::DataReadyEnable, ENABLE_ALL).await?,
    }

    // Signal shaping, independent of the trigger set
    if self.config.signal.active_high {
      self.set_bit(Reg::DataReadyConfig, ConfigBit::Polarity).await?;
    } else {
      self.clear_bit(Reg::DataReadyConfig, ConfigBit::Polarity).await?;
    }
    if self.config.signal.pin_pulse {
      self.set_bit(Reg::DataReadyConfig, ConfigBit::Pulse).await?;
    } else {
      self.clear_bit(Reg::DataReadyConfig, ConfigBit::Pulse).await?;
    }

    // Trigger bits alone do nothing without the master enable.
    if self.config.trigger == InterruptTrigger::None {
      self.clear_bit(Reg::DataReadyConfig, ConfigBit::Enable).await
    } else {
      self.set_bit(Reg::DataReadyConfig, ConfigBit::Enable).await
    }
  }
}
