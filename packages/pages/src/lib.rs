//! Page objects for the cluster dashboard.

pub mod hosts;
pub mod login;

pub use hosts::HostsPageHelper;
pub use login::LoginPageHelper;
