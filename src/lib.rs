#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Async, `no_std` driver for the XYZ Interactive ZX distance and gesture
//! sensor (the SparkFun ZX sensor board).
//!
//! The ZX sensor reports the position of a nearby object along a horizontal
//! (X) and vertical (Z) axis, and recognizes left/right/up swipe gestures
//! together with their speed. This crate exposes a strongly typed API on top
//! of the raw register map, with helpers for:
//!
//! - Validating the chip's model and register map revision at bring-up
//! - Configuring which event categories assert the DR (data ready) line and
//!   how the line behaves (polarity, pulse vs. level)
//! - Decoding gestures and position samples with the chip's error sentinels
//!   rejected instead of surfaced as data
//! - Consuming events either by polling or by awaiting DR edges, using
//!   `embedded-hal` / `embedded-hal-async` 1.0 traits so the driver works
//!   across MCU families
//!
//! ```no_run
//! use embedded_hal_async::{digital::Wait, i2c::{I2c, SevenBitAddress}};
//! use zx_sensor::{Config, Event, InterruptTrigger, SignalPolicy, ZxSensor};
//!
//! async fn example<I2C, DR, E>(i2c: I2C, dr: DR) -> Result<(), zx_sensor::Error<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//!   DR: Wait,
//! {
//!   let config = Config::default()
//!     .with_trigger(InterruptTrigger::Gesture)
//!     .with_signal(SignalPolicy::active_high());
//!
//!   let mut sensor = ZxSensor::new(i2c, dr, config);
//!   sensor.initialize().await?;
//!
//!   loop {
//!     if let Event::Gesture(gesture) = sensor.wait_for_event().await? {
//!       // handle gesture
//!       let _ = gesture;
//!     }
//!   }
//! }
//! ```
mod config;
mod control;
mod defs;
mod event;
mod rw;

use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

pub use config::*;
use defs::Reg;
pub use defs::{DEFAULT_ADDR, MAX_POSITION, MODEL_VERSION, REGISTER_MAP_VERSION};
pub use event::{Event, Gesture, GestureEvent, Position, Status};

/// Errors that can occur while interacting with the sensor.
#[derive(Debug, defmt::Format)]
pub enum Error<E> {
  /// An I²C read transaction failed with the underlying driver error.
  BusRead(E),
  /// An I²C write transaction failed with the underlying driver error.
  BusWrite(E),
  /// The device reported an unexpected model identifier during bring-up.
  UnexpectedModel(u8),
  /// The device reported an unexpected register map revision during bring-up.
  UnexpectedRegisterMap(u8),
}

/// Driver for the ZX gesture/position sensor.
///
/// The driver owns the I²C peripheral and the DR pin and offers strongly
/// typed configuration and decode functions. Create an instance with
/// [`ZxSensor::new`], provide a [`config::Config`], and then call
/// [`ZxSensor::initialize`] to validate the chip and transmit the staged
/// interrupt policy.
///
/// All register access is serialized through `&mut self`; a multi-threaded
/// consumer must supply its own mutual exclusion around the whole driver.
pub struct ZxSensor<I, DR> {
  i2c: I,
  dr: DR,
  config: config::Config,
}

impl<I, E, DR> ZxSensor<I, DR>
where
  I: I2c<SevenBitAddress, Error = E>,
  DR: Wait,
{
  /// Create a new driver instance with the provided peripherals and
  /// configuration template.
  ///
  /// The configuration is not transmitted to the device until
  /// [`ZxSensor::initialize`] is called. This allows the caller to adjust
  /// fields after construction if desired.
  pub fn new(i2c: I, dr: DR, config: config::Config) -> Self {
    Self { i2c, dr, config }
  }

  /// Initialize the sensor.
  ///
  /// Validates the model identifier and register map revision against the
  /// versions this driver is written for, transmits the staged interrupt
  /// policy, and acknowledges any stale notification so the session starts
  /// with the DR line de-asserted.
  pub async fn initialize(&mut self) -> Result<(), Error<E>> {
    let model = self.model_version().await?;
    if model != defs::MODEL_VERSION {
      return Err(Error::UnexpectedModel(model));
    }

    let map = self.register_map_version().await?;
    if map != defs::REGISTER_MAP_VERSION {
      return Err(Error::UnexpectedRegisterMap(map));
    }

    self.apply_interrupt_config().await?;
    self.clear_interrupt().await
  }

  /// Release the owned peripherals.
  pub fn release(self) -> (I, DR) {
    (self.i2c, self.dr)
  }
}
