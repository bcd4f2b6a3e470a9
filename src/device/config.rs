//! Device Configuration

/// Error type for configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Major number 0 is reserved for dynamic allocation.
    InvalidMajor,
    /// The device name is empty.
    EmptyName,
    /// A quota of zero would refuse every client.
    ZeroSessions,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMajor => write!(f, "major number 0 is reserved"),
            Self::EmptyName => write!(f, "device name is empty"),
            Self::ZeroSessions => write!(f, "session quota must be at least 1"),
        }
    }
}

/// Static configuration of a math device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Character-device major number.
    pub major: u32,
    /// Device name, as listed by the registry.
    pub name: &'static str,
    /// Maximum concurrently open sessions.
    pub max_sessions: usize,
}

impl DeviceConfig {
    /// Major 77, name `math`, four sessions.
    pub const DEFAULT: Self = Self {
        major: 77,
        name: "math",
        max_sessions: 4,
    };

    #[inline]
    pub const fn with_major(mut self, major: u32) -> Self {
        self.major = major;
        self
    }

    #[inline]
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    #[inline]
    pub const fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.major == 0 {
            return Err(ConfigError::InvalidMajor);
        }
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.max_sessions == 0 {
            return Err(ConfigError::ZeroSessions);
        }
        Ok(())
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
