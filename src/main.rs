//! smartotels-tui - The Smartotels brochure site in a terminal
//!
//! This is the main entry point for the smartotels-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod cli;
mod component;
mod components;
mod config;
mod model;
mod motion;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::cli::Cli;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::path::PathBuf;
use tracing_appender::non_blocking;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE_NAME: &str = "smartotels-tui.log";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };
    if let Some(frame_rate) = cli.frame_rate {
        config.frame_rate = frame_rate;
    }
    config.validate()?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }
    if cli.write_config {
        match &cli.config {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
    }

    // Log to a file; the terminal belongs to the UI
    let log_dir = cli
        .log_dir
        .clone()
        .or_else(|| Config::config_dir().map(|dir| dir.join("logs")))
        .unwrap_or_else(|| PathBuf::from("logs"));
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("smartotels_tui=info")),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();
    // Note: _guard must live for the whole of main() so logs are flushed

    tracing::info!(frame_rate = config.frame_rate, "starting");

    // Setup terminal
    let mut tui = Tui::new()?.with_frame_interval(config.frame_interval());
    tui.enter()?;

    let result = build_app(config, &tui).and_then(|mut app| run_app(&mut tui, &mut app));

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = %err, "exiting with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("bye");
    Ok(())
}

/// Create the app for the current terminal size
fn build_app(config: Config, tui: &Tui) -> Result<App> {
    let size = tui.size()?;
    let mut app = App::new(config, size.width, size.height)?;
    app.init()?;
    Ok(app)
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Poll for events; None means a frame is due
        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => {
                app.update(Action::Tick)?;
                tui.draw(|frame| {
                    if let Err(e) = app.draw(frame, frame.area()) {
                        tracing::error!(error = %e, "draw failed");
                    }
                })?;
                continue;
            }
        };

        // Process the action; it might produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
