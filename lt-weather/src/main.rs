//! Lithuania Weather - terminal forecast viewer
//!
//! # Usage
//!
//! ```sh
//! # Default endpoints, forecast calls go through the relay
//! cargo run -p lt-weather
//!
//! # Call the API directly and keep a debug log
//! RUST_LOG=debug cargo run -p lt-weather -- --no-proxy --log-file lt-weather.log
//! ```

use std::cell::RefCell;
use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectRuntime, EffectStoreWithMiddleware, EventKind, EventOutcome, LoggingMiddleware,
    RenderContext,
};

use lt_weather::action::Action;
use lt_weather::api::MeteoClient;
use lt_weather::components::{Component, ForecastView, ForecastViewProps};
use lt_weather::config::Args;
use lt_weather::effect::handle_effect;
use lt_weather::logging;
use lt_weather::reducer::reducer;
use lt_weather::state::AppState;

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    logging::init(args.log_file.as_deref())?;

    // Validate configuration before entering TUI mode
    let endpoints = match args.endpoints() {
        Ok(endpoints) => endpoints,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    let client = match MeteoClient::new(endpoints, args.timeout()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: could not build HTTP client.");
            eprintln!("Details: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        api_base = %client.endpoints().api_base(),
        proxy = ?client.endpoints().proxy(),
        "Starting"
    );

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, client, &args).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Exited with error");
    }
    result
}

struct ForecastUi {
    view: ForecastView,
}

impl ForecastUi {
    fn new() -> Self {
        Self {
            view: ForecastView,
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
    ) {
        let props = ForecastViewProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.view.render(frame, area, props);
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if let EventKind::Resize(..) = event {
            return EventOutcome::needs_render();
        }

        let props = ForecastViewProps {
            state,
            is_focused: true,
        };
        EventOutcome::actions(self.view.handle_event(event, props))
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    client: MeteoClient,
    args: &Args,
) -> io::Result<()> {
    let store =
        EffectStoreWithMiddleware::new(AppState::new(), reducer, LoggingMiddleware::verbose());

    let mut runtime = EffectRuntime::from_store(store);

    // Tick timer for loading animation
    runtime
        .subscriptions()
        .interval("tick", args.tick_interval(), || Action::Tick);

    // The place directory is requested exactly once, at startup
    runtime.enqueue(Action::PlacesFetch);

    let ui = RefCell::new(ForecastUi::new());

    runtime
        .run(
            terminal,
            |frame, area, state, render_ctx| {
                ui.borrow_mut().render(frame, area, state, render_ctx);
            },
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            |effect, ctx| handle_effect(effect, ctx.tasks(), &client),
        )
        .await
}
