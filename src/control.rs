use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::{Error, Reg, ZxSensor};

impl<I, E, DR> ZxSensor<I, DR>
where
  I: I2c<SevenBitAddress, Error = E>,
  DR: Wait,
{
  /// Fetch the raw model identifier as reported by the device.
  ///
  /// No interpretation is applied; compare against [`crate::MODEL_VERSION`]
  /// (which is what [`ZxSensor::initialize`] does).
  pub async fn model_version(&mut self) -> Result<u8, Error<E>> {
    self.read_byte(Reg::Model).await
  }

  /// Fetch the raw register map revision as reported by the device.
  pub async fn register_map_version(&mut self) -> Result<u8, Error<E>> {
    self.read_byte(Reg::RegisterMapVersion).await
  }

  /// Acknowledge a pending data-ready notification.
  ///
  /// Reading STATUS is what de-asserts the DR line in level mode, so this must
  /// run before further edges can be observed. In polling mode every
  /// availability check has the same effect and this call is optional.
  pub async fn clear_interrupt(&mut self) -> Result<(), Error<E>> {
    self.read_byte(Reg::Status).await?;
    Ok(())
  }
}
