// SPDX-License-Identifier: MPL-2.0
//! A single toast: severity, localized text and lifetime.

use crate::app::config::{TOAST_LONG_SECS, TOAST_SHORT_SECS};
use crate::i18n::fluent::I18n;
use crate::ui::action_icons;
use crate::ui::design_tokens::palette;
use iced::widget::Svg;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies a toast for dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Files uploaded, download saved.
    Success,
    /// Link copied, file removed from the gallery.
    Info,
    /// Files refused by the validation gate, settings problems.
    Warning,
    /// Failed uploads and downloads. Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// How long a toast stays once shown; `None` means until dismissed.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(TOAST_SHORT_SECS)),
            Severity::Warning => Some(Duration::from_secs(TOAST_LONG_SECS)),
            Severity::Error => None,
        }
    }

    pub(super) fn glyph(self) -> Svg<'static> {
        match self {
            Severity::Success => action_icons::notification::success(),
            Severity::Info => action_icons::notification::info(),
            Severity::Warning => action_icons::notification::warning(),
            Severity::Error => action_icons::notification::error(),
        }
    }
}

/// A toast waiting to be shown or on screen.
///
/// The text is stored as an i18n key plus arguments and resolved at render
/// time.
#[derive(Debug, Clone)]
pub struct Notification {
    id: ToastId,
    severity: Severity,
    key: String,
    args: Vec<(String, String)>,
    lifetime: Option<Duration>,
    shown_at: Option<Instant>,
}

impl Notification {
    pub fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            id: ToastId::next(),
            severity,
            key: key.into(),
            args: Vec::new(),
            lifetime: severity.lifetime(),
            shown_at: None,
        }
    }

    pub fn success(key: impl Into<String>) -> Self {
        Self::new(Severity::Success, key)
    }

    pub fn info(key: impl Into<String>) -> Self {
        Self::new(Severity::Info, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    /// Adds a Fluent argument.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    /// Keeps the toast on screen for `duration` instead of the severity default.
    #[must_use]
    pub fn linger(mut self, duration: Duration) -> Self {
        self.lifetime = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }

    /// Value of the argument `name`, if set.
    #[must_use]
    pub fn arg_value(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Localized text of the toast.
    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        let args: Vec<(&str, &str)> = self
            .args
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        i18n.tr_with_args(&self.key, &args)
    }

    pub(super) fn mark_shown(&mut self, now: Instant) {
        self.shown_at.get_or_insert(now);
    }

    /// Whether the toast has been on screen for its whole lifetime at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        match (self.shown_at, self.lifetime) {
            (Some(shown_at), Some(lifetime)) => now.saturating_duration_since(shown_at) >= lifetime,
            _ => false,
        }
    }
}
