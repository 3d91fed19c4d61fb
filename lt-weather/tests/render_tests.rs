//! Render tests for the full screen using RenderHarness

use lt_weather::components::{Component, ForecastView, ForecastViewProps, PLACEHOLDER};
use lt_weather::state::{AppState, Forecast, ForecastTimestamp, Place};
use tui_dispatch::testing::RenderHarness;

fn render(state: &AppState) -> String {
    let mut render = RenderHarness::new(60, 20);
    let mut component = ForecastView;

    render.render_to_string_plain(|frame| {
        let props = ForecastViewProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn vilnius() -> Place {
    Place {
        code: "VLN".into(),
        name: "Vilnius".into(),
    }
}

fn clear_five() -> Forecast {
    Forecast {
        forecast_timestamps: vec![ForecastTimestamp {
            forecast_time_utc: None,
            air_temperature: 5.0,
            condition_code: "clear".into(),
        }],
    }
}

fn loaded(places: Vec<Place>) -> AppState {
    AppState {
        places,
        loading_places: false,
        places_requested: true,
        ..AppState::new()
    }
}

#[test]
fn test_render_initial_state() {
    let output = render(&AppState::new());

    assert!(output.contains("Lithuania Weather"), "Should show title");
    assert!(output.contains("Loading places..."), "Should show loading");
    assert!(!output.contains("Select a City:"), "Selector hidden while loading");
}

#[test]
fn test_render_vilnius_forecast() {
    let state = AppState {
        selected_place: Some(vilnius()),
        forecast: Some(clear_five()),
        forecast_code: Some("VLN".into()),
        cursor: 1,
        ..loaded(vec![vilnius()])
    };

    let output = render(&state);

    assert!(output.contains("Weather in Vilnius"));
    assert!(output.contains("Temperature: 5°C"), "got:\n{output}");
    assert!(output.contains("Condition: clear"));
}

#[test]
fn test_render_other_place_forecast_is_not_relabelled() {
    let kaunas = Place {
        code: "KNS".into(),
        name: "Kaunas".into(),
    };
    let state = AppState {
        selected_place: Some(kaunas.clone()),
        forecast: Some(clear_five()),
        forecast_code: Some("VLN".into()),
        error: Some("Error fetching forecast data".into()),
        ..loaded(vec![vilnius(), kaunas])
    };

    let output = render(&state);

    assert!(output.contains("Error fetching forecast data"));
    assert!(!output.contains("Weather in Kaunas"), "got:\n{output}");
    assert!(!output.contains("Temperature: 5°C"));
}

#[test]
fn test_render_empty_directory() {
    let output = render(&loaded(vec![]));

    assert!(output.contains("Select a City:"));
    assert!(output.contains(PLACEHOLDER));
    assert!(!output.contains("Weather in"));
}

#[test]
fn test_render_directory_failure() {
    let state = AppState {
        error: Some("Failed to fetch places".into()),
        ..loaded(vec![])
    };

    let output = render(&state);

    assert!(output.contains("Failed to fetch places"));
    assert!(!output.contains("Loading places..."));
}

#[test]
fn test_render_loading_forecast() {
    let state = AppState {
        loading_forecast: true,
        selected_place: Some(vilnius()),
        ..loaded(vec![vilnius()])
    };

    let output = render(&state);

    assert!(output.contains("Loading forecast..."));
    assert!(!output.contains("Weather in"), "No forecast yet");
}

#[test]
fn test_render_help_bar() {
    let output = render(&loaded(vec![vilnius()]));

    assert!(output.contains("select"), "Should show select hint");
    assert!(output.contains("quit"), "Should show quit hint");
}
