//! Compile-time build metadata exposed to the CLI.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `git describe` output at build time, or `unknown` outside a checkout.
pub const GIT_COMMIT: &str = env!("TERMFRAME_BUILD_COMMIT");

/// Build time in seconds since the Unix epoch.
pub const BUILD_EPOCH: &str = env!("TERMFRAME_BUILD_EPOCH");

/// Version block shown by `termframe --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("TERMFRAME_BUILD_COMMIT"),
    "\nbuilt: unix:",
    env!("TERMFRAME_BUILD_EPOCH")
);
