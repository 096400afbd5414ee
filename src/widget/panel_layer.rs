// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that draws one panel with its transition visual applied.
//!
//! Hidden panels keep their widget state but draw nothing and receive no
//! events. Visible panels are drawn clipped to their bounds under the
//! panel transform (translate, then scale about the centre). Opacity below
//! one is rendered by covering the panel with a scrim in the background
//! colour.

use crate::panel_stack::{PanelTransform, PanelVisual};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Color, Element, Event, Length, Rectangle, Size, Transformation};

/// One panel of a stack, drawn with its current visual.
pub struct PanelLayer<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    visual: PanelVisual,
    scrim: Color,
}

impl<'a, Message, Theme, Renderer> PanelLayer<'a, Message, Theme, Renderer> {
    /// Wraps `content` with the given visual and scrim colour.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        visual: PanelVisual,
        scrim: Color,
    ) -> Self {
        Self {
            content: content.into(),
            visual,
            scrim,
        }
    }
}

/// Maps a panel transform onto a renderer transformation about `bounds`' centre.
fn transformation(transform: PanelTransform, bounds: Rectangle) -> Transformation {
    let center = bounds.center();
    Transformation::translate(
        center.x + transform.translation.x,
        center.y + transform.translation.y,
    ) * Transformation::scale(transform.scale)
        * Transformation::translate(-center.x, -center.y)
}

/// Scrim colour that turns `opacity` of the content into a fade.
fn scrim_color(scrim: Color, opacity: f32) -> Option<Color> {
    let alpha = (1.0 - opacity).clamp(0.0, 1.0);
    (alpha > 0.0).then_some(Color {
        a: scrim.a * alpha,
        ..scrim
    })
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for PanelLayer<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        if self.visual.hidden {
            return;
        }

        let bounds = layout.bounds();
        let scrim = scrim_color(self.scrim, self.visual.opacity);

        renderer.with_layer(bounds, |renderer| {
            renderer.with_transformation(
                transformation(self.visual.transform, bounds),
                |renderer| {
                    self.content.as_widget().draw(
                        &tree.children[0],
                        renderer,
                        theme,
                        style,
                        layout,
                        cursor,
                        viewport,
                    );

                    if let Some(color) = scrim {
                        renderer.fill_quad(
                            renderer::Quad {
                                bounds,
                                ..renderer::Quad::default()
                            },
                            color,
                        );
                    }
                },
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if self.visual.hidden {
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.visual.hidden {
            return mouse::Interaction::default();
        }

        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        if self.visual.hidden {
            return None;
        }

        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<PanelLayer<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(layer: PanelLayer<'a, Message, Theme, Renderer>) -> Self {
        Self::new(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Vector};

    #[test]
    fn scrim_is_skipped_for_opaque_panels() {
        assert_eq!(scrim_color(Color::BLACK, 1.0), None);
    }

    #[test]
    fn scrim_alpha_is_inverse_of_opacity() {
        let color = scrim_color(Color::WHITE, 0.25).expect("scrim expected");
        assert!((color.a - 0.75).abs() < 1e-6);
        assert!((color.r - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn scrim_alpha_is_clamped() {
        let color = scrim_color(Color::BLACK, -2.0).expect("scrim expected");
        assert!((color.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn identity_transform_keeps_points_in_place() {
        let bounds = Rectangle::new(Point::new(10.0, 20.0), Size::new(200.0, 100.0));
        let matrix = transformation(PanelTransform::IDENTITY, bounds);
        let point = Point::new(50.0, 60.0) * matrix;
        assert!((point.x - 50.0).abs() < 1e-4);
        assert!((point.y - 60.0).abs() < 1e-4);
    }

    #[test]
    fn transform_scales_about_centre_then_translates() {
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(200.0, 100.0));
        let transform = PanelTransform {
            translation: Vector::new(-100.0, 0.0),
            scale: 0.5,
        };
        let matrix = transformation(transform, bounds);

        let center = bounds.center() * matrix;
        assert!((center.x - 0.0).abs() < 1e-4);
        assert!((center.y - 50.0).abs() < 1e-4);

        let corner = Point::ORIGIN * matrix;
        assert!((corner.x - -50.0).abs() < 1e-4);
        assert!((corner.y - 25.0).abs() < 1e-4);
    }
}
