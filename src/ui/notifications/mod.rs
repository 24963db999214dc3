// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Upload results, refused files, copied links and download outcomes are
//! reported as toasts that never block the gallery.
//!
//! ```ignore
//! manager.push(Notification::success("notification-upload-success").arg("count", "3"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity, ToastId};
pub use toast::Toast;
