//! The Math Device
//!
//! Ties the session quota and the command dispatcher to the file-operation
//! entry points.
//!
//! # Lifecycle
//! - `new`: validate the configuration and fill the quota (module init)
//! - `install`: register under the configured major number
//! - `open` / `ioctl` / `release`: per-client traffic
//! - `uninstall`: unregister (module exit)

use crate::admission::{OpenError, Session, SessionQuota};

use super::chrdev::{DeviceRegistry, RegistryError};
use super::config::{ConfigError, DeviceConfig};
use super::errno::Errno;
use super::fops::{FileOperations, OpenFile};
use super::ioctl;

/// A quota-limited arithmetic character device.
#[derive(Debug)]
pub struct MathDevice {
    config: DeviceConfig,
    quota: SessionQuota,
}

impl MathDevice {
    /// Create a device with every session slot free.
    pub fn new(config: DeviceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            quota: SessionQuota::new(config.max_sessions),
        })
    }

    /// The device configuration.
    #[inline]
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// The admission counter, for inspection.
    #[inline]
    pub fn quota(&self) -> &SessionQuota {
        &self.quota
    }

    /// Open a typed session, bypassing the file layer.
    pub fn open_session(&self) -> Result<Session<'_>, OpenError> {
        Session::open(&self.quota)
    }

    /// Register this device in `registry`.
    pub fn install<'a>(&'a self, registry: &DeviceRegistry<'a>) -> Result<(), RegistryError> {
        registry
            .register(self.config.major, self.config.name, self)
            .map_err(|e| {
                log::error!("[MATH] device registration failed: {}", e);
                e
            })?;

        log::info!("[MATH] module \"{}\" was loaded", self.config.name);
        log::info!(
            "[MATH] run \"mknod /dev/{} c {} 0\"",
            self.config.name,
            self.config.major
        );
        Ok(())
    }

    /// Remove this device from `registry`.
    pub fn uninstall(&self, registry: &DeviceRegistry<'_>) -> Result<(), RegistryError> {
        registry.unregister(self.config.major, self)?;
        log::info!("[MATH] module \"{}\" was unloaded", self.config.name);
        Ok(())
    }

    /// [`FileOperations::ioctl`] flattened to the kernel return convention.
    pub fn ioctl_raw(&self, file: &OpenFile<'_>, cmd: u32, arg: &mut [i32]) -> i64 {
        super::errno::to_retval(self.ioctl(file, cmd, arg))
    }
}

impl FileOperations for MathDevice {
    fn open(&self) -> Result<OpenFile<'_>, Errno> {
        log::debug!("[MATH] opening /dev/{}", self.config.name);
        let session = self.open_session()?;
        Ok(OpenFile::new(session))
    }

    fn release<'a>(&'a self, file: OpenFile<'a>) -> Result<(), Errno> {
        log::debug!("[MATH] closing /dev/{}", self.config.name);
        file.into_session().close();
        Ok(())
    }

    fn ioctl(&self, file: &OpenFile<'_>, cmd: u32, arg: &mut [i32]) -> Result<(), Errno> {
        ioctl::ioctl(file.session(), cmd, arg)
    }
}
