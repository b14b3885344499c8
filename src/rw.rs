use embedded_hal_async::digital::Wait;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::{Error, Reg, ZxSensor};

impl<I, E, DR> ZxSensor<I, DR>
where
  I: I2c<SevenBitAddress, Error = E>,
  DR: Wait,
{
  pub(crate) async fn read_byte(&mut self, reg: Reg) -> Result<u8, Error<E>> {
    let addr = [reg as u8];
    let mut buf = [0u8; 1];
    self.i2c.write_read(self.config.address, &addr, &mut buf).await.map_err(Error::BusRead)?;
    Ok(buf[0])
  }

  pub(crate) async fn write_byte(&mut self, reg: Reg, value: u8) -> Result<(), Error<E>> {
    let buf = [reg as u8, value];
    self.i2c.write(self.config.address, &buf).await.map_err(Error::BusWrite)
  }

  // Typed helpers. Single-byte register views convert infallibly, so the
  // error arm is never taken.
  pub(crate) async fn read<T: TryFrom<[u8; 1]>>(&mut self, reg: Reg) -> Result<T, Error<E>> {
    let b = self.read_byte(reg).await?;
    T::try_from([b]).map_err(|_| unreachable!())
  }

  /// Set a single bit of `reg`, leaving the rest of the byte untouched.
  ///
  /// This is a read-modify-write sequence, not an atomic transaction: a read
  /// failure leaves the register unchanged, but a write failure after a
  /// successful read leaves it in an unknown state. The caller decides whether
  /// to retry.
  pub(crate) async fn set_bit(&mut self, reg: Reg, bit: impl Into<u8>) -> Result<(), Error<E>> {
    let bit: u8 = bit.into();
    self.set_bits(reg, 1 << bit).await
  }

  /// Clear a single bit of `reg`. Same read-modify-write caveat as [`Self::set_bit`].
  pub(crate) async fn clear_bit(&mut self, reg: Reg, bit: impl Into<u8>) -> Result<(), Error<E>> {
    let bit: u8 = bit.into();
    let val = self.read_byte(reg).await?;
    self.write_byte(reg, val & !(1 << bit)).await
  }

  /// Set every bit of `mask` in `reg` in a single read-modify-write pass.
  pub(crate) async fn set_bits(&mut self, reg: Reg, mask: u8) -> Result<(), Error<E>> {
    let val = self.read_byte(reg).await?;
    self.write_byte(reg, val | mask).await
  }
}
