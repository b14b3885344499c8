/******************************************************************************
 * Refer to the XYZ Interactive ZX sensor datasheet for more information:     *
 * - https://www.sparkfun.com/products/retired/13162                          *
 * ========================================================================== *
 *                        ZX Sensor - Registers & Memory Map                  *
*******************************************************************************/

/// Default 7-bit I²C address of the sensor.
pub const DEFAULT_ADDR: u8 = 0x10;

/// Model identifier the driver is written against.
pub const MODEL_VERSION: u8 = 0x01;
/// Register map revision the driver is written against.
pub const REGISTER_MAP_VERSION: u8 = 0x01;

/// Highest position value the sensor can physically report on either axis.
/// Anything above this (or a zero byte) is the chip's error sentinel.
pub const MAX_POSITION: u8 = 240;

#[allow(dead_code)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reg {
  /// Data-ready flags; reading this register de-asserts the DR line.
  Status = 0x00,
  /// Per-category data-ready interrupt enables.
  DataReadyEnable = 0x01,
  /// DR pin polarity, pulse/level behaviour and master enable.
  DataReadyConfig = 0x02,
  /// Most recent gesture, overwritten by the next one.
  Gesture = 0x04,
  /// Duration of the most recent gesture (larger = slower).
  GestureSpeed = 0x05,
  /// Horizontal position, 0..=240.
  XPos = 0x08,
  /// Vertical position, 0..=240.
  ZPos = 0x0A,
  RegisterMapVersion = 0xFE,
  Model = 0xFF,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

/// Bit positions in [`Reg::DataReadyEnable`].
#[allow(dead_code)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub(crate) enum DataReadyBit {
  Ranging = 0,
  Position = 1,
  Swipe = 2,
  Hover = 3,
  HoverGesture = 4,
  Edge = 5,
}

impl From<DataReadyBit> for u8 {
  #[inline]
  fn from(b: DataReadyBit) -> Self {
    b as u8
  }
}

/// Every defined enable bit of [`Reg::DataReadyEnable`].
pub(crate) const ENABLE_ALL: u8 = 0b0011_1111;

/// Bit positions in [`Reg::DataReadyConfig`].
#[allow(dead_code)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub(crate) enum ConfigBit {
  /// Set: DR is active-high. Clear: active-low.
  Polarity = 0,
  /// Set: DR pulses on new data. Clear: DR stays asserted until STATUS is read.
  Pulse = 1,
  Force = 6,
  /// Master enable; without it no trigger bit produces a signal.
  Enable = 7,
}

impl From<ConfigBit> for u8 {
  #[inline]
  fn from(b: ConfigBit) -> Self {
    b as u8
  }
}
