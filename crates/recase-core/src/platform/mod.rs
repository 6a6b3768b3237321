/// Platform-specific functionality — directory access checks.

pub mod permissions;

pub use permissions::check_access;
