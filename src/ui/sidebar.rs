// SPDX-License-Identifier: MPL-2.0
//! Sidebar section navigator.
//!
//! One button per [`Section`]; the active one is highlighted and inert, so
//! re-clicking it cannot re-trigger a switch.

use crate::app::section::Section;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Messages emitted by the sidebar.
#[derive(Debug, Clone)]
pub enum Message {
    Activate(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    SectionChanged(Section),
}

/// Process a sidebar message against the currently active section.
pub fn update(message: Message, active: &mut Section) -> Event {
    match message {
        Message::Activate(section) => {
            if *active == section {
                Event::None
            } else {
                *active = section;
                Event::SectionChanged(section)
            }
        }
    }
}

/// Render the sidebar with one entry per section.
pub fn view<'a>(active: Section) -> Element<'a, Message> {
    let mut entries = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new("Festival Admin")
                .size(typography::SUBTITLE),
        )
        .push(iced::widget::Space::new().height(spacing::SM));

    for section in Section::ALL {
        entries = entries.push(entry(section, section == active));
    }

    Container::new(entries)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::sidebar)
        .into()
}

fn entry<'a>(section: Section, is_active: bool) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(section.glyph()))
        .push(Text::new(section.label()));

    let entry = button(row)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill);

    if is_active {
        // Inert: pressing the active entry must not emit anything.
        entry.style(styles::button::selected).into()
    } else {
        entry
            .on_press(Message::Activate(section))
            .style(styles::button::ghost)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activating_another_section_switches() {
        let mut active = Section::Overview;
        let event = update(Message::Activate(Section::Users), &mut active);
        assert_eq!(active, Section::Users);
        assert!(matches!(event, Event::SectionChanged(Section::Users)));
    }

    #[test]
    fn activating_the_current_section_is_a_no_op() {
        let mut active = Section::Orders;
        let event = update(Message::Activate(Section::Orders), &mut active);
        assert_eq!(active, Section::Orders);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn sidebar_view_renders_for_every_section() {
        for section in Section::ALL {
            let _element = view(section);
        }
    }
}
