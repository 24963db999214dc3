// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// What fills the window below the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Upload zone and gallery.
    Gallery,
    /// Upload settings are incomplete; only a retry is offered.
    ConfigurationError,
}
