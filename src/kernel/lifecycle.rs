use super::ConfigError;

/// Constructor validation lifecycle shared by kernel structs.
///
/// A kernel is only obtainable through [`try_new`](KernelLifecycle::try_new),
/// so a constructed kernel always holds a validated configuration.
pub trait KernelLifecycle: Sized {
    /// Kernel config type.
    type Config;

    /// Construct a validated kernel from config.
    fn try_new(config: Self::Config) -> Result<Self, ConfigError>;
}
