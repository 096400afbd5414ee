// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::{DemoPanel, Message};
use crate::panel_stack::PanelStack;
use crate::widget;
use iced::widget::{button, container, text, toggler, Column, Container, Row, Space};
use iced::{Alignment, Border, Color, Element, Length, Theme};

const SPACING: f32 = 12.0;
const PADDING: f32 = 16.0;
const PANEL_RADIUS: f32 = 12.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub stack: &'a PanelStack<DemoPanel>,
    pub animated: bool,
    pub scrim: Color,
}

/// Renders the toolbar, the panel stack and the navigation row.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let count = ctx.stack.len();
    let panels = widget::view(ctx.stack, ctx.scrim, |index, panel| {
        view_panel(index, count, panel)
    });

    Column::new()
        .spacing(SPACING)
        .padding(PADDING)
        .push(view_toolbar(&ctx))
        .push(
            Container::new(panels)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(view_navigation(ctx.stack))
        .into()
}

fn view_toolbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let axis_button = button(text(format!("Axis: {}", ctx.stack.axis())))
        .style(button::secondary)
        .on_press(Message::ToggleAxis);

    let animated = toggler(ctx.animated)
        .label("Animated")
        .on_toggle(Message::ToggleAnimated);

    let append_button = button(text("Add panel"))
        .style(button::secondary)
        .on_press(Message::AppendPanel);

    Row::new()
        .spacing(SPACING)
        .align_y(Alignment::Center)
        .push(axis_button)
        .push(animated)
        .push(Space::new().width(Length::Fill))
        .push(append_button)
        .into()
}

fn view_panel<'a>(index: usize, count: usize, panel: &'a DemoPanel) -> Element<'a, Message> {
    let color = panel.color;
    let content = Column::new()
        .spacing(SPACING)
        .align_x(Alignment::Center)
        .push(text(&panel.title).size(32))
        .push(text(format!("{} of {}", index + 1, count)).size(16));

    container(content)
        .center(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(color.into()),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: PANEL_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn view_navigation(stack: &PanelStack<DemoPanel>) -> Element<'_, Message> {
    let selected = stack.selected_index();

    let previous = button(text("Previous")).on_press_maybe(
        selected
            .is_some_and(|index| index > 0)
            .then_some(Message::Previous),
    );
    let next = button(text("Next")).on_press_maybe(
        selected
            .is_some_and(|index| index + 1 < stack.len())
            .then_some(Message::Next),
    );

    let dots = stack.panels().iter().enumerate().fold(
        Row::new().spacing(SPACING / 2.0),
        |row, (index, _)| {
            let style = if selected == Some(index) {
                button::primary
            } else {
                button::secondary
            };
            row.push(
                button(text((index + 1).to_string()))
                    .style(style)
                    .on_press(Message::Select(index)),
            )
        },
    );

    Row::new()
        .spacing(SPACING)
        .align_y(Alignment::Center)
        .push(previous)
        .push(Space::new().width(Length::Fill))
        .push(dots)
        .push(Space::new().width(Length::Fill))
        .push(next)
        .into()
}
