//! Polling example: check for gestures every 100 ms and log them.
#![allow(unused)]
use embedded_hal_async::{
  delay::DelayNs,
  digital::Wait,
  i2c::{I2c, SevenBitAddress},
};
use zx_sensor::{Config, Event, InterruptTrigger, SignalPolicy, ZxSensor};

#[allow(dead_code)]
async fn main_async<I2C, DR, D, E>(i2c: I2C, dr: DR, mut delay: D) -> Result<(), zx_sensor::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  DR: Wait,
  D: DelayNs,
{
  // No DR line involved in polling mode; the pin stays idle.
  let mut sensor = ZxSensor::new(i2c, dr, Config::default());
  sensor.initialize().await?;

  loop {
    match sensor.next_event(&mut delay).await? {
      Event::Gesture(gesture) => {
        let _ = (gesture.gesture, gesture.speed);
        // handle gesture
      }
      Event::Position(position) => {
        let _ = (position.x, position.z);
        // handle position sample
      }
    }
  }
}

fn main() {}
