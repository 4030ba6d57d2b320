// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::swipeable::{self, Branch, ContainerStyle, Props, StyleProp, WrapperStyle};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use crate::ui::{icons, styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Text};
use iced::{Color, Element, Length, Padding, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub swipe: &'a swipeable::State,
    pub props: Props,
    pub loader_color: Color,
    pub style: &'a StyleProp,
}

/// Styling of the dark pill hosting the arrow.
#[must_use]
pub fn pill_style() -> StyleProp {
    StyleProp {
        container: ContainerStyle {
            width: Length::Fixed(sizing::PILL),
            height: Length::Fixed(sizing::PILL),
            padding: Padding::ZERO,
            align_x: Horizontal::Center,
            style: styles::container::pill,
        },
        swipeable_wrapper: WrapperStyle {
            margin: Padding {
                bottom: spacing::WRAPPER_GAP,
                ..Padding::ZERO
            },
            align_y: Vertical::Bottom,
        },
    }
}

fn swipe_element<'a>(opacity: f32) -> Element<'a, swipeable::Message> {
    icons::up_arrow()
        .width(Length::Fixed(sizing::ICON))
        .height(Length::Fixed(sizing::ICON))
        .opacity(opacity)
        .style(styles::svg::on_pill)
        .into()
}

fn finished_view<'a>() -> Element<'a, swipeable::Message> {
    Container::new(
        icons::check_mark()
            .width(Length::Fixed(sizing::ICON))
            .height(Length::Fixed(sizing::ICON))
            .style(styles::svg::on_pill),
    )
    .center(Length::Fill)
    .into()
}

fn hint_key(props: Props) -> &'static str {
    match Branch::from(props) {
        Branch::Loading => "swipe-hint-loading",
        Branch::Finished => "swipe-hint-finished",
        Branch::Interactive => "swipe-hint",
    }
}

/// Renders the pill centered on the backdrop with a hint below it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let element = |opacity: f32| swipe_element(opacity);
    let finished = || finished_view();

    let pill = ctx
        .swipe
        .view(
            swipeable::ViewContext::new(ctx.props, &finished, &element, ctx.style)
                .loader_color(ctx.loader_color),
        )
        .map(Message::Swipe);

    let hint = Text::new(ctx.i18n.tr(hint_key(ctx.props)))
        .size(typography::CAPTION)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(ColorScheme::for_theme(theme).hint),
        });

    let column = Column::new()
        .push(pill)
        .push(hint)
        .spacing(spacing::MD)
        .align_x(Horizontal::Center);

    Container::new(column)
        .center(Length::Fill)
        .style(styles::container::backdrop)
        .into()
}
