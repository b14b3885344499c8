use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::defs::MAX_POSITION;
use crate::{Error, Reg, ZxSensor};

/// Sleep between availability checks in polling mode.
const POLL_INTERVAL_MS: u32 = 100;

/// Snapshot of the STATUS register.
///
/// Reading STATUS has a side effect: it acknowledges a pending data-ready
/// notification and de-asserts the DR line in level mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
#[packbits::pack(u8)]
pub struct Status {
  /// A position sample is waiting in the X/Z registers.
  pub position_ready: bool,
  pub overflow: bool,
  pub swipe: bool,
  pub hover: bool,
  pub hover_gesture: bool,
  pub edge: bool,
  #[skip(1)]
  pub heartbeat: bool,
}

impl Status {
  /// Any of the gesture category flags is set.
  pub fn gesture_ready(&self) -> bool {
    self.swipe || self.hover || self.hover_gesture
  }
}

/// The most recent gesture reported by the sensor.
///
/// The chip treats the zero/unknown state as "no gesture", so every
/// unrecognized byte decodes to [`Gesture::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Gesture {
  None,
  SwipeRight,
  SwipeLeft,
  SwipeUp,
}

impl Gesture {
  pub const fn from_raw(raw: u8) -> Self {
    match raw {
      0x01 => Self::SwipeRight,
      0x02 => Self::SwipeLeft,
      0x08 => Self::SwipeUp,
      _ => Self::None,
    }
  }
}

/// A decoded gesture together with its speed.
///
/// Speed is the duration of the gesture: smaller is faster. The value is
/// reported verbatim from the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct GestureEvent {
  pub gesture: Gesture,
  pub speed: u8,
}

/// A single position sample. Both axes range over `1..=240`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct Position {
  pub x: u8,
  pub z: u8,
}

/// High-level event produced by the notification loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Event {
  Gesture(GestureEvent),
  Position(Position),
}

impl<I, E, DR> ZxSensor<I, DR>
where
  I: I2c<SevenBitAddress, Error = E>,
  DR: Wait,
{
  /// Read the STATUS register. This acknowledges a pending notification.
  pub async fn status(&mut self) -> Result<Status, Error<E>> {
    self.read(Reg::Status).await
  }

  /// A position sample is available for reading.
  pub async fn position_available(&mut self) -> Result<bool, Error<E>> {
    Ok(self.status().await?.position_ready)
  }

  /// A gesture is available for reading.
  pub async fn gesture_available(&mut self) -> Result<bool, Error<E>> {
    Ok(self.status().await?.gesture_ready())
  }

  /// Read the most recent gesture.
  ///
  /// Call only after availability has been confirmed (or from the decode path
  /// of the notification loop); otherwise the register may hold a stale event.
  pub async fn gesture(&mut self) -> Result<Gesture, Error<E>> {
    Ok(Gesture::from_raw(self.read_byte(Reg::Gesture).await?))
  }

  /// Read the speed of the most recent gesture, verbatim.
  pub async fn gesture_speed(&mut self) -> Result<u8, Error<E>> {
    self.read_byte(Reg::GestureSpeed).await
  }

  /// Read the most recent gesture together with its speed.
  pub async fn gesture_event(&mut self) -> Result<GestureEvent, Error<E>> {
    let gesture = self.gesture().await?;
    let speed = self.gesture_speed().await?;
    Ok(GestureEvent { gesture, speed })
  }

  /// Read the X position. `Ok(None)` when the register holds the chip's error
  /// sentinel: zero (indistinguishable from "no reading yet") or anything
  /// beyond the sensor's field of view.
  pub async fn x(&mut self) -> Result<Option<u8>, Error<E>> {
    Ok(in_range(self.read_byte(Reg::XPos).await?))
  }

  /// Read the Z position. Same sentinel handling as [`Self::x`].
  pub async fn z(&mut self) -> Result<Option<u8>, Error<E>> {
    Ok(in_range(self.read_byte(Reg::ZPos).await?))
  }

  /// Read a full position sample; `Ok(None)` if either axis reads as the
  /// error sentinel.
  pub async fn position(&mut self) -> Result<Option<Position>, Error<E>> {
    let Some(x) = self.x().await? else { return Ok(None) };
    let Some(z) = self.z().await? else { return Ok(None) };
    Ok(Some(Position { x, z }))
  }

  /// Poll for the next event, sleeping 100 ms between availability checks.
  ///
  /// Polling and edge-triggered operation are mutually exclusive per session;
  /// pick one of this and [`Self::wait_for_event`].
  pub async fn next_event(&mut self, delay: &mut impl DelayNs) -> Result<Event, Error<E>> {
    loop {
      let status = self.status().await?;
      if let Some(event) = self.decode(status).await? {
        return Ok(event);
      }
      delay.delay_ms(POLL_INTERVAL_MS).await;
    }
  }

  /// Await the next DR edge and decode the event behind it.
  ///
  /// The STATUS read directly after the edge is mandatory: it de-asserts the
  /// line so further edges can be observed. Spurious wakeups (no decodable
  /// data behind the edge) are swallowed and the wait resumes.
  pub async fn wait_for_event(&mut self) -> Result<Event, Error<E>> {
    loop {
      self.wait_for_data_ready().await?;
      let status = self.status().await?;
      if let Some(event) = self.decode(status).await? {
        return Ok(event);
      }
    }
  }

  async fn wait_for_data_ready(&mut self) -> Result<(), Error<E>> {
    if self.config.signal.active_high {
      self.dr.wait_for_rising_edge().await.map_err(|_| unreachable!())
    } else {
      self.dr.wait_for_falling_edge().await.map_err(|_| unreachable!())
    }
  }

  // Gesture data wins over position data when both flags are set: an
  // unacknowledged gesture is overwritten by the next one, while position
  // samples are continuous.
  async fn decode(&mut self, status: Status) -> Result<Option<Event>, Error<E>> {
    if status.gesture_ready() {
      let event = self.gesture_event().await?;
      if event.gesture != Gesture::None {
        return Ok(Some(Event::Gesture(event)));
      }
    }
    if status.position_ready {
      if let Some(position) = self.position().await? {
        return Ok(Some(Event::Position(position)));
      }
    }
    Ok(None)
  }
}

const fn in_range(raw: u8) -> Option<u8> {
  if raw == 0 || raw > MAX_POSITION {
    None
  } else {
    Some(raw)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn gesture_decodes_known_bytes() {
    assert_eq!(Gesture::from_raw(0x01), Gesture::SwipeRight);
    assert_eq!(Gesture::from_raw(0x02), Gesture::SwipeLeft);
    assert_eq!(Gesture::from_raw(0x08), Gesture::SwipeUp);
  }

  #[test]
  fn unknown_gestures_decode_to_none() {
    for raw in [0x00, 0x03, 0x04, 0x07, 0x09, 0x80, 0xFF] {
      assert_eq!(Gesture::from_raw(raw), Gesture::None);
    }
  }

  #[test]
  fn positions_outside_field_of_view_are_sentinels() {
    assert_eq!(in_range(0), None);
    assert_eq!(in_range(241), None);
    assert_eq!(in_range(255), None);
    assert_eq!(in_range(1), Some(1));
    assert_eq!(in_range(120), Some(120));
    assert_eq!(in_range(240), Some(240));
  }

  #[test]
  fn status_flags_unpack() {
    let status = Status::try_from([0b0000_0100u8]).ok().unwrap();
    assert!(status.swipe);
    assert!(status.gesture_ready());
    assert!(!status.position_ready);

    let status = Status::try_from([0b0000_0001u8]).ok().unwrap();
    assert!(status.position_ready);
    assert!(!status.gesture_ready());

    let status = Status::try_from([0b1001_1000u8]).ok().unwrap();
    assert!(status.hover);
    assert!(status.hover_gesture);
    assert!(status.heartbeat);
    assert!(status.gesture_ready());
  }
}
