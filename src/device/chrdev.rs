//! Character Device Registry
//!
//! Maps major numbers to the file operations of registered devices.
//!
//! # Design
//! - Fixed-size table, no allocation
//! - Protected by a spinlock; the lock is never held while a device
//!   operation runs

use spin::Mutex;

use super::errno::Errno;
use super::fops::{FileOperations, OpenFile};

/// Number of devices the registry can hold.
pub const MAX_DEVICES: usize = 8;

/// Error type for registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Major number 0 cannot be registered.
    InvalidMajor,
    /// Another device already owns the major number.
    MajorInUse,
    /// Every table slot is taken.
    TableFull,
    /// No device is registered under the major number.
    NotRegistered,
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMajor => write!(f, "invalid major number"),
            Self::MajorInUse => write!(f, "major number already in use"),
            Self::TableFull => write!(f, "device table full"),
            Self::NotRegistered => write!(f, "no device registered"),
        }
    }
}

/// One registered device.
#[derive(Clone, Copy)]
struct Entry<'a> {
    major: u32,
    name: &'a str,
    fops: &'a dyn FileOperations,
}

/// Table of registered character devices.
pub struct DeviceRegistry<'a> {
    table: Mutex<[Option<Entry<'a>>; MAX_DEVICES]>,
}

impl<'a> DeviceRegistry<'a> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            table: Mutex::new([None; MAX_DEVICES]),
        }
    }

    /// Register `fops` under `major`.
    pub fn register(
        &self,
        major: u32,
        name: &'a str,
        fops: &'a dyn FileOperations,
    ) -> Result<(), RegistryError> {
        if major == 0 {
            return Err(RegistryError::InvalidMajor);
        }

        let mut table = self.table.lock();
        if table.iter().flatten().any(|e| e.major == major) {
            return Err(RegistryError::MajorInUse);
        }

        let slot = table
            .iter_mut()
            .find(|e| e.is_none())
            .ok_or(RegistryError::TableFull)?;
        *slot = Some(Entry { major, name, fops });

        log::info!("[CHRDEV] registered \"{}\" as major {}", name, major);
        Ok(())
    }

    /// Remove `fops` from `major`.
    ///
    /// Fails with `NotRegistered` if `major` is free or owned by another
    /// device.
    pub fn unregister(
        &self,
        major: u32,
        fops: &dyn FileOperations,
    ) -> Result<(), RegistryError> {
        let owner = fops as *const dyn FileOperations;
        let mut table = self.table.lock();
        let slot = table
            .iter_mut()
            .find(|e| {
                matches!(e, Some(entry)
                    if entry.major == major
                        && core::ptr::addr_eq(entry.fops as *const dyn FileOperations, owner))
            })
            .ok_or(RegistryError::NotRegistered)?;

        if let Some(entry) = slot.take() {
            log::info!("[CHRDEV] unregistered \"{}\" (major {})", entry.name, major);
        }
        Ok(())
    }

    fn entry(&self, major: u32) -> Option<Entry<'a>> {
        self.table
            .lock()
            .iter()
            .flatten()
            .find(|e| e.major == major)
            .copied()
    }

    /// File operations registered under `major`.
    pub fn lookup(&self, major: u32) -> Option<&'a dyn FileOperations> {
        self.entry(major).map(|e| e.fops)
    }

    /// Name registered under `major`.
    pub fn name_of(&self, major: u32) -> Option<&'a str> {
        self.entry(major).map(|e| e.name)
    }

    /// Open the device registered under `major`.
    pub fn open(&self, major: u32) -> Result<OpenFile<'a>, Errno> {
        let fops = self.lookup(major).ok_or(Errno::Enodev)?;
        fops.open()
    }

    /// Number of registered devices.
    pub fn len(&self) -> usize {
        self.table.lock().iter().flatten().count()
    }

    /// Whether no device is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DeviceRegistry<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(feature = "loom")))]
mod tests {
    use super::*;
    use crate::device::{DeviceConfig, MathDevice};

    #[test]
    fn test_register_lookup_unregister() {
        let device = MathDevice::new(DeviceConfig::DEFAULT).unwrap();
        let registry = DeviceRegistry::new();

        assert_eq!(device.install(&registry), Ok(()));
        assert_eq!(registry.name_of(77), Some("math"));
        assert!(registry.lookup(77).is_some());
        assert_eq!(registry.len(), 1);

        assert_eq!(device.uninstall(&registry), Ok(()));
        assert!(registry.lookup(77).is_none());
        assert_eq!(device.uninstall(&registry), Err(RegistryError::NotRegistered));
    }

    #[test]
    fn test_major_conflict() {
        let a = MathDevice::new(DeviceConfig::DEFAULT).unwrap();
        let b = MathDevice::new(DeviceConfig::DEFAULT.with_name("math2")).unwrap();
        let registry = DeviceRegistry::new();

        assert_eq!(a.install(&registry), Ok(()));
        assert_eq!(b.install(&registry), Err(RegistryError::MajorInUse));
        assert_eq!(registry.register(0, "zero", &b), Err(RegistryError::InvalidMajor));
    }

    #[test]
    fn test_unregister_requires_owner() {
        let a = MathDevice::new(DeviceConfig::DEFAULT).unwrap();
        let b = MathDevice::new(DeviceConfig::DEFAULT.with_name("math2")).unwrap();
        let registry = DeviceRegistry::new();

        assert_eq!(a.install(&registry), Ok(()));
        assert_eq!(b.install(&registry), Err(RegistryError::MajorInUse));

        assert_eq!(b.uninstall(&registry), Err(RegistryError::NotRegistered));
        assert_eq!(registry.name_of(77), Some("math"));
        assert_eq!(registry.unregister(77, &b), Err(RegistryError::NotRegistered));
        assert!(registry.lookup(77).is_some());

        assert_eq!(a.uninstall(&registry), Ok(()));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_table_full() {
        let devices: Vec<MathDevice> = (1..=MAX_DEVICES as u32 + 1)
            .map(|major| MathDevice::new(DeviceConfig::DEFAULT.with_major(major)).unwrap())
            .collect();
        let registry = DeviceRegistry::new();

        for device in &devices[..MAX_DEVICES] {
            assert_eq!(device.install(&registry), Ok(()));
        }
        assert_eq!(
            devices[MAX_DEVICES].install(&registry),
            Err(RegistryError::TableFull)
        );
    }

    #[test]
    fn test_open_through_registry() {
        let device = MathDevice::new(DeviceConfig::DEFAULT.with_max_sessions(1)).unwrap();
        let registry = DeviceRegistry::new();
        device.install(&registry).unwrap();

        assert_eq!(registry.open(12).unwrap_err(), Errno::Enodev);

        let file = registry.open(77).unwrap();
        assert_eq!(registry.open(77).unwrap_err(), Errno::Ebusy);

        let fops = registry.lookup(77).unwrap();
        let mut x = [2, 0];
        assert_eq!(fops.ioctl(&file, crate::command::numbers::MATH_SQR, &mut x), Ok(()));
        assert_eq!(x[1], 4);

        assert_eq!(fops.release(file), Ok(()));
        assert!(registry.open(77).is_ok());
    }
}
