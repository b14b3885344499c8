//! Interrupt example: configure the DR line for gestures and await edges.
//!
//! The sensor asserts DR high whenever a gesture completes; the driver reads
//! STATUS right after each edge, which de-asserts the line again.
#![allow(unused)]
use embedded_hal_async::{
  digital::Wait,
  i2c::{I2c, SevenBitAddress},
};
use zx_sensor::{Config, Event, InterruptTrigger, SignalPolicy, ZxSensor};

#[allow(dead_code)]
async fn main_async<I2C, DR, E>(i2c: I2C, dr: DR) -> Result<(), zx_sensor::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  DR: Wait,
{
  let config = Config::default()
    .with_trigger(InterruptTrigger::Gesture)
    .with_signal(SignalPolicy::active_high());

  let mut sensor = ZxSensor::new(i2c, dr, config);
  sensor.initialize().await?;

  loop {
    if let Event::Gesture(gesture) = sensor.wait_for_event().await? {
      let _ = (gesture.gesture, gesture.speed);
      // handle gesture
    }
  }
}

fn main() {}
