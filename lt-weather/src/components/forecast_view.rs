//! Top-level screen
//!
//! Layout, top to bottom: error line, place selector, forecast panel,
//! help bar. Key handling for the whole app lives here too.

use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::{Frame, Rect};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{
    Component, ForecastPanel, ForecastPanelProps, HelpBar, HelpBarProps, PlaceSelector,
    PlaceSelectorProps, spinner,
};
use tui_dispatch::EventKind;

use crate::action::Action;
use crate::state::AppState;

const ERROR_ICON: &str = "⚠";

pub struct ForecastViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct ForecastView;

impl Component<Action> for ForecastView {
    type Props<'a> = ForecastViewProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: ForecastViewProps<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }

        let EventKind::Key(key) = event else {
            return vec![];
        };
        if key.kind != KeyEventKind::Press {
            return vec![];
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                vec![Action::Quit]
            }
            KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
            // Nothing to pick from until the directory settles
            _ if props.state.loading_places => vec![],
            KeyCode::Up | KeyCode::Char('k') => vec![Action::UiCursorUp],
            KeyCode::Down | KeyCode::Char('j') => vec![Action::UiCursorDown],
            KeyCode::Enter => vec![Action::PlaceSelect(
                props.state.highlighted_code().to_string(),
            )],
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: ForecastViewProps<'_>) {
        let state = props.state;

        let busy_indicator = if state.is_busy() {
            format!(" {} ", spinner(state.tick_count))
        } else {
            String::new()
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" ☁ Lithuania Weather{} ", busy_indicator))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let chunks = Layout::vertical([
            Constraint::Length(1),                     // Error
            Constraint::Min(3),                        // Selector
            Constraint::Length(ForecastPanel::HEIGHT), // Forecast
            Constraint::Length(1),                     // Help bar
        ])
        .split(inner);

        if let Some(error) = state.error.as_deref() {
            let line = Line::from(vec![
                Span::styled(format!("{ERROR_ICON} "), Style::default().fg(Color::Red)),
                Span::styled(error.to_string(), Style::default().fg(Color::Rgb(200, 100, 100))),
            ]);
            frame.render_widget(Paragraph::new(line), chunks[0]);
        }

        let selector_props = PlaceSelectorProps {
            places: &state.places,
            loading: state.loading_places,
            cursor: state.cursor,
            selected_code: state.selected_place.as_ref().map(|p| p.code.as_str()),
            tick_count: state.tick_count,
        };
        PlaceSelector.render(frame, chunks[1], selector_props);

        ForecastPanel.render(frame, chunks[2], ForecastPanelProps { state });

        HelpBar.render(frame, chunks[3], HelpBarProps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Place;
    use tui_dispatch::testing::{ActionAssertions, ActionAssertionsEq, RenderHarness, key};

    fn ready_state() -> AppState {
        AppState {
            places: vec![Place {
                code: "VLN".into(),
                name: "Vilnius".into(),
            }],
            loading_places: false,
            places_requested: true,
            ..AppState::new()
        }
    }

    fn events(state: &AppState, key_str: &str) -> Vec<Action> {
        let props = ForecastViewProps {
            state,
            is_focused: true,
        };
        ForecastView.handle_event(&EventKind::Key(key(key_str)), props)
    }

    #[test]
    fn test_enter_on_placeholder_selects_empty_code() {
        let actions = events(&ready_state(), "enter");
        actions.assert_count(1);
        actions.assert_first(Action::PlaceSelect(String::new()));
    }

    #[test]
    fn test_enter_selects_highlighted_place() {
        let state = AppState {
            cursor: 1,
            ..ready_state()
        };
        events(&state, "enter").assert_first(Action::PlaceSelect("VLN".into()));
    }

    #[test]
    fn test_navigation_keys() {
        let state = ready_state();
        events(&state, "down").assert_first(Action::UiCursorDown);
        events(&state, "j").assert_first(Action::UiCursorDown);
        events(&state, "up").assert_first(Action::UiCursorUp);
        events(&state, "k").assert_first(Action::UiCursorUp);
    }

    #[test]
    fn test_quit_keys_work_while_loading() {
        let state = AppState::new();
        events(&state, "q").assert_first(Action::Quit);
        events(&state, "esc").assert_first(Action::Quit);
        events(&state, "ctrl+c").assert_first(Action::Quit);
        events(&state, "enter").assert_empty();
    }

    #[test]
    fn test_unfocused_ignores() {
        let state = ready_state();
        let props = ForecastViewProps {
            state: &state,
            is_focused: false,
        };
        ForecastView
            .handle_event(&EventKind::Key(key("enter")), props)
            .assert_empty();
    }

    #[test]
    fn test_key_release_is_ignored() {
        let state = ready_state();
        let props = ForecastViewProps {
            state: &state,
            is_focused: true,
        };
        let mut release = key("enter");
        release.kind = KeyEventKind::Release;

        ForecastView
            .handle_event(&EventKind::Key(release), props)
            .assert_empty();
    }

    #[test]
    fn test_resize_is_not_an_action() {
        let state = ready_state();
        let props = ForecastViewProps {
            state: &state,
            is_focused: true,
        };
        ForecastView
            .handle_event(&EventKind::Resize(80, 24), props)
            .assert_empty();
    }

    #[test]
    fn test_render_error_line() {
        let state = AppState {
            error: Some("Place code is missing!".into()),
            ..ready_state()
        };

        let mut render = RenderHarness::new(50, 16);
        let output = render.render_to_string_plain(|frame| {
            let props = ForecastViewProps {
                state: &state,
                is_focused: true,
            };
            ForecastView.render(frame, frame.area(), props);
        });

        assert!(output.contains("Lithuania Weather"));
        assert!(output.contains("Place code is missing!"));
        assert!(output.contains("quit"));
    }
}
