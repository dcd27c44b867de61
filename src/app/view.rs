use super::messages::Message;
use super::state::{App, HEADER_TITLE, TRACK_HEIGHT, TRACK_SCROLL_ID};
use crate::pages::{
    AppIcon, DOCK_APPS, HOME_APPS, INFRA_HEADER, INFRA_LINKS, LinkItem, MAC_APPS, MAC_APPS_HEADER,
    PAGE_COUNT,
};
use crate::theme;
use crate::track::PAGE_WIDTH;
use crate::widgets::clock::{clock_label, date_label};
use crate::widgets::{display_or_placeholder, github, satellite, seismic, weather};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, Row, Space, button, column, container, horizontal_space, mouse_area, row, scrollable,
    text,
};
use iced::{Background, Border, Element, Length, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let header = text(HEADER_TITLE).size(26).color(theme::TEXT_PRIMARY);

        let content = column![header, self.phone()]
            .spacing(18)
            .align_x(Horizontal::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(24)
            .style(|_theme| container::Style {
                background: Some(Background::Color(theme::BACKDROP)),
                ..container::Style::default()
            })
            .into()
    }

    fn phone(&self) -> Element<'_, Message> {
        let screen = column![
            self.status_bar(),
            self.widget_cards(),
            self.track(),
            self.dots(),
            self.dock(),
            home_indicator(),
        ]
        .spacing(12)
        .align_x(Horizontal::Center);

        let screen = container(screen)
            .width(Length::Fixed(PAGE_WIDTH))
            .padding([12, 0])
            .style(|_theme| container::Style {
                background: Some(Background::Color(theme::SCREEN)),
                border: Border {
                    radius: 28.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            });

        container(screen)
            .padding(10)
            .style(|_theme| container::Style {
                background: Some(Background::Color(theme::PHONE_BODY)),
                border: Border {
                    radius: 36.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            })
            .into()
    }

    fn status_bar(&self) -> Element<'_, Message> {
        row![
            text(clock_label(&self.now)).size(14).color(theme::TEXT_PRIMARY),
            horizontal_space(),
            text("▂▄▆█").size(10).color(theme::TEXT_MUTED),
            text("100%").size(12).color(theme::TEXT_MUTED),
        ]
        .spacing(8)
        .padding([0, 18])
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .into()
    }

    fn widget_cards(&self) -> Element<'_, Message> {
        let repo_count =
            display_or_placeholder(self.widgets.github.as_ref(), github::format_count);

        let date_card = card(
            column![
                text(date_label(&self.now)).size(13).color(theme::TEXT_MUTED),
                text(clock_label(&self.now)).size(26).color(theme::TEXT_PRIMARY),
            ]
            .spacing(2)
            .into(),
        );

        let stats_card = card(
            column![
                stat_row("apps", repo_count.clone()),
                stat_row("repos", repo_count),
            ]
            .spacing(4)
            .into(),
        );

        let weather_card = card(
            column![
                text("weather").size(11).color(theme::TEXT_MUTED),
                text(display_or_placeholder(
                    self.widgets.weather.as_ref(),
                    weather::format_temperature,
                ))
                .size(18)
                .color(theme::TEXT_PRIMARY),
            ]
            .spacing(2)
            .into(),
        );

        let seismic_card = card(
            column![
                text("M4.5+ today").size(11).color(theme::TEXT_MUTED),
                text(display_or_placeholder(
                    self.widgets.seismic.as_ref(),
                    seismic::format_count,
                ))
                .size(18)
                .color(theme::TEXT_PRIMARY),
            ]
            .spacing(2)
            .into(),
        );

        // e.g. "ISS · daylight" once telemetry reports visibility.
        let satellite_title = match self
            .widgets
            .satellite
            .as_ref()
            .and_then(|fix| fix.visibility.as_deref())
        {
            Some(visibility) => format!("ISS · {visibility}"),
            None => "ISS".to_string(),
        };

        let satellite_card = card(
            column![
                text(satellite_title).size(11).color(theme::TEXT_MUTED),
                text(display_or_placeholder(
                    self.widgets.satellite.as_ref(),
                    satellite::format_motion,
                ))
                .size(13)
                .color(theme::TEXT_PRIMARY),
                text(display_or_placeholder(
                    self.widgets.satellite.as_ref(),
                    satellite::format_position,
                ))
                .size(11)
                .color(theme::TEXT_MUTED),
            ]
            .spacing(2)
            .into(),
        );

        column![
            row![date_card, stats_card].spacing(10),
            row![weather_card, seismic_card, satellite_card].spacing(10),
        ]
        .spacing(10)
        .padding([0, 14])
        .width(Length::Fill)
        .into()
    }

    /// The horizontally scrollable strip of pages, wrapped in the drag
    /// surface. All programmatic movement goes through the scroll id; the
    /// strip itself has no visible scrollbar.
    fn track(&self) -> Element<'_, Message> {
        let pages = row![
            self.grid_page(),
            links_page(MAC_APPS_HEADER, &MAC_APPS),
            links_page(INFRA_HEADER, &INFRA_LINKS),
        ];

        let strip = scrollable(pages)
            .id(TRACK_SCROLL_ID.clone())
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new().width(0).margin(0).scroller_width(0),
            ))
            .width(Length::Fixed(PAGE_WIDTH))
            .height(Length::Fixed(TRACK_HEIGHT));

        mouse_area(strip)
            .on_press(Message::ViewportPressed)
            .on_move(Message::ViewportMoved)
            .on_release(Message::ViewportReleased)
            .on_exit(Message::ViewportExited)
            .into()
    }

    fn grid_page(&self) -> Element<'_, Message> {
        let mut grid = Column::new().spacing(14);
        for chunk in HOME_APPS.chunks(4) {
            let mut icons = Row::new().spacing(12);
            for icon in chunk {
                icons = icons.push(app_icon(icon));
            }
            grid = grid.push(icons);
        }

        container(grid)
            .width(Length::Fixed(PAGE_WIDTH))
            .padding([10, 16])
            .into()
    }

    fn dots(&self) -> Element<'_, Message> {
        let mut dot_row = Row::new().spacing(8);
        for index in 0..PAGE_COUNT {
            let active = index == self.nav.current_page();
            let dot = container(Space::new(0, 0))
                .width(8)
                .height(8)
                .style(move |_theme: &Theme| container::Style {
                    background: Some(Background::Color(if active {
                        theme::DOT_ACTIVE
                    } else {
                        theme::DOT_INACTIVE
                    })),
                    border: Border {
                        radius: 4.0.into(),
                        ..Border::default()
                    },
                    ..container::Style::default()
                });
            dot_row = dot_row.push(mouse_area(dot).on_press(Message::DotPressed(index)));
        }

        container(dot_row)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    }

    fn dock(&self) -> Element<'_, Message> {
        let mut shortcuts = Row::new().spacing(18);
        for icon in &DOCK_APPS {
            shortcuts = shortcuts.push(app_icon(icon));
        }

        container(shortcuts)
            .padding([10, 16])
            .style(|_theme| container::Style {
                background: Some(Background::Color(theme::DOCK)),
                border: Border {
                    radius: 22.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            })
            .into()
    }
}

fn links_page(header: &'static str, items: &'static [LinkItem]) -> Element<'static, Message> {
    let mut list = Column::new().spacing(8);
    for item in items {
        let label = column![
            text(item.name).size(14).color(theme::TEXT_PRIMARY),
            text(item.detail).size(11).color(theme::TEXT_MUTED),
        ]
        .spacing(2);

        list = list.push(
            button(
                row![label, horizontal_space(), text("↗").size(14).color(theme::TEXT_MUTED)]
                    .align_y(Vertical::Center),
            )
            .on_press(Message::OpenLink(item.url))
            .padding([8, 12])
            .width(Length::Fill)
            .style(link_row_style),
        );
    }

    container(
        column![text(header).size(18).color(theme::TEXT_PRIMARY), list].spacing(12),
    )
    .width(Length::Fixed(PAGE_WIDTH))
    .padding([10, 16])
    .into()
}

fn app_icon(icon: &AppIcon) -> Element<'static, Message> {
    let tile = container(text(icon.glyph).size(26))
        .width(54)
        .height(54)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|_theme| container::Style {
            background: Some(Background::Color(theme::CARD)),
            border: Border {
                radius: 14.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    button(
        column![tile, text(icon.label).size(11).color(theme::TEXT_PRIMARY)]
            .spacing(4)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::OpenLink(icon.href))
    .padding(0)
    .style(|_theme, _status| button::Style {
        background: None,
        text_color: theme::TEXT_PRIMARY,
        ..button::Style::default()
    })
    .into()
}

fn card(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .padding(10)
        .width(Length::FillPortion(1))
        .style(|_theme| container::Style {
            background: Some(Background::Color(theme::CARD)),
            border: Border {
                radius: 14.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn stat_row(label: &'static str, value: String) -> Row<'static, Message> {
    row![
        text(label).size(12).color(theme::TEXT_MUTED),
        horizontal_space(),
        text(value).size(14).color(theme::TEXT_PRIMARY),
    ]
    .align_y(Vertical::Center)
}

fn home_indicator() -> Element<'static, Message> {
    container(Space::new(0, 0))
        .width(120)
        .height(4)
        .style(|_theme| container::Style {
            background: Some(Background::Color(theme::HOME_INDICATOR)),
            border: Border {
                radius: 2.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn link_row_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => theme::DOCK,
        _ => theme::CARD,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: theme::TEXT_PRIMARY,
        border: Border {
            radius: 12.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
