use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::{Component, spinner};
use crate::action::Action;
use crate::state::Place;

/// Label of the row that carries no place code
pub const PLACEHOLDER: &str = "Select a city";

/// Place dropdown: placeholder row followed by every place
pub struct PlaceSelector;

pub struct PlaceSelectorProps<'a> {
    pub places: &'a [Place],
    pub loading: bool,
    /// Highlighted row, 0 = placeholder
    pub cursor: usize,
    /// Code of the committed selection, marked in the list
    pub selected_code: Option<&'a str>,
    pub tick_count: u32,
}

impl PlaceSelector {
    fn items<'a>(places: &'a [Place], selected_code: Option<&str>) -> Vec<ListItem<'a>> {
        let placeholder = ListItem::new(Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray).italic(),
        )));

        std::iter::once(placeholder)
            .chain(places.iter().map(|place| {
                let mut spans = vec![Span::raw(place.name.as_str())];
                if selected_code == Some(place.code.as_str()) {
                    spans.push(Span::styled(" ✓", Style::default().fg(Color::Green)));
                }
                ListItem::new(Line::from(spans))
            }))
            .collect()
    }
}

impl Component<Action> for PlaceSelector {
    type Props<'a> = PlaceSelectorProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);

        if props.loading {
            let line = Line::from(vec![
                Span::styled(spinner(props.tick_count), Style::default().fg(Color::Cyan)),
                Span::styled(" Loading places...", Style::default().fg(Color::Gray)),
            ]);
            frame.render_widget(Paragraph::new(line), chunks[0]);
            return;
        }

        let subtitle = Line::from(Span::styled(
            "Select a City:",
            Style::default().fg(Color::White).bold(),
        ));
        frame.render_widget(Paragraph::new(subtitle), chunks[0]);

        let list = List::new(Self::items(props.places, props.selected_code))
            .highlight_symbol("▸ ")
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        let mut list_state = ListState::default().with_selected(Some(props.cursor));
        frame.render_stateful_widget(list, chunks[1], &mut list_state);
    }
}
