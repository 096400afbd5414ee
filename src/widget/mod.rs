// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of a [`PanelStack`].

pub mod panel_layer;

pub use panel_layer::PanelLayer;

use crate::panel_stack::PanelStack;
use iced::widget::Stack;
use iced::{Color, Element, Length};

/// Builds the widget tree for `stack`.
///
/// `panel` turns each handle into its content. Every panel stays in the
/// tree, hidden ones included, so their widget state survives selection
/// changes. `scrim` should be the background the stack sits on.
pub fn view<'a, P, Message, F>(
    stack: &'a PanelStack<P>,
    scrim: Color,
    mut panel: F,
) -> Element<'a, Message>
where
    Message: 'a,
    F: FnMut(usize, &'a P) -> Element<'a, Message>,
{
    let layers = stack
        .panels()
        .iter()
        .zip(stack.visuals())
        .enumerate()
        .map(|(index, (handle, visual))| -> Element<'a, Message> {
            PanelLayer::new(panel(index, handle), *visual, scrim).into()
        });

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
