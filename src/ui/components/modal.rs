// SPDX-License-Identifier: MPL-2.0
//! Modal layer drawn over the main view.
//!
//! Clicks on the dimmed backdrop emit `on_dismiss`; clicks on the content
//! itself are swallowed so they never reach the backdrop or the view below.

use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{center, mouse_area, opaque, Stack};
use iced::Element;

/// Stacks `content` centered over `base` with a dismissable backdrop.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let backdrop = center(opaque(content))
        .padding(spacing::XXL)
        .style(styles::overlay::backdrop);

    Stack::new()
        .push(base)
        .push(opaque(mouse_area(backdrop).on_press(on_dismiss)))
        .into()
}
