use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, spinner};
use crate::action::Action;
use crate::state::{AppState, ForecastTimestamp};

/// Forecast for the selected place, or the loading line
pub struct ForecastPanel;

pub struct ForecastPanelProps<'a> {
    pub state: &'a AppState,
}

impl ForecastPanel {
    pub const HEIGHT: u16 = 6;
}

impl Component<Action> for ForecastPanel {
    type Props<'a> = ForecastPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        frame.render_widget(Paragraph::new(panel_lines(props.state)), area);
    }
}

fn panel_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if state.loading_forecast {
        lines.push(Line::from(vec![
            Span::styled(spinner(state.tick_count), Style::default().fg(Color::Cyan)),
            Span::styled(" Loading forecast...", Style::default().fg(Color::Gray)),
        ]));
    }

    let Some((place, forecast)) = state.forecast_view() else {
        return lines;
    };

    lines.push(Line::from(Span::styled(
        format!("Weather in {}", place.name),
        Style::default().fg(Color::White).bold(),
    )));

    match forecast.current() {
        Some(reading) => lines.extend(reading_lines(reading)),
        None => lines.push(Line::from(Span::styled(
            "No forecast data available.",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    lines
}

fn reading_lines(reading: &ForecastTimestamp) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Temperature: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}°C", reading.air_temperature),
                Style::default().fg(temp_to_color(reading.air_temperature)).bold(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Condition: ", Style::default().fg(Color::Gray)),
            Span::raw(reading.condition_code.clone()),
        ]),
    ];

    if let Some(time) = &reading.forecast_time_utc {
        lines.push(Line::from(Span::styled(
            format!("as of {time} UTC"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

/// Get temperature-based color
fn temp_to_color(celsius: f64) -> Color {
    match celsius as i32 {
        ..=-10 => Color::Rgb(150, 200, 255),  // Very cold - light blue
        -9..=0 => Color::Rgb(100, 180, 255),  // Cold - blue
        1..=10 => Color::Rgb(100, 220, 200),  // Cool - cyan
        11..=20 => Color::Rgb(150, 230, 150), // Mild - green
        21..=30 => Color::Rgb(255, 220, 100), // Warm - yellow
        _ => Color::Rgb(255, 150, 80),        // Hot - orange
    }
}
