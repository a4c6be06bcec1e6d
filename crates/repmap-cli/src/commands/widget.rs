//! Headless widget commands.
//!
//! Both commands run the real widget runtime against a server, so they
//! exercise the same event flow as the browser page.

use anyhow::{anyhow, bail, Result};
use repmap_core::StateInfo;
use repmap_widget::{
    DataStatus, Event, HttpBackend, MapContent, Runtime, Tone, WidgetHandle, WidgetState,
};
use tracing::warn;

fn start(url: &str) -> Result<WidgetHandle> {
    let (runtime, handle) = Runtime::new(HttpBackend::new(url)?);
    tokio::spawn(runtime.run());
    Ok(handle)
}

/// Open the page with `query` and print what it shows once loading is done.
pub async fn preview(url: &str, query: &str, json: bool) -> Result<()> {
    let mut handle = start(url)?;
    handle.send(Event::PageLoaded {
        query: query.to_string(),
    })?;
    let state = handle.settle().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_state(&state);
    }

    if state.status.tone == Tone::Error {
        bail!("{}", state.status.text);
    }
    Ok(())
}

fn print_state(state: &WidgetState) {
    let selected_state = state
        .states
        .value()
        .and_then(StateInfo::by_abbr)
        .map(|s| format!("{} ({})", s.display_name(), s.abbr))
        .unwrap_or_else(|| "(none)".to_string());

    println!(
        "📋 Title:  {}",
        if state.title.is_empty() {
            "-"
        } else {
            state.title.as_str()
        }
    );
    println!("📍 State:  {}", selected_state);
    println!(
        "👤 Rep:    {}",
        state.reps.value().unwrap_or(&state.reps.placeholder)
    );
    if !state.reps.options.is_empty() {
        for rep in &state.reps.options {
            println!("   • {}", rep);
        }
    }
    match &state.map.content {
        MapContent::Loaded {
            abbr, districts, ..
        } => println!("🗺️  Map:    {} with {} district(s)", abbr, districts.len()),
        MapContent::Placeholder { message } if message.is_empty() => println!("🗺️  Map:    -"),
        MapContent::Placeholder { message } => println!("🗺️  Map:    {}", message),
    }
    if !state.status.is_empty() {
        println!("💬 Status: {}", state.status.text);
    }
}

/// Fill in and submit the signup form.
pub async fn signup(url: &str, email: &str, state: &str, rep: &str) -> Result<()> {
    let info = StateInfo::by_abbr(&state.to_uppercase())
        .or_else(|| StateInfo::resolve(state))
        .ok_or_else(|| anyhow!("Unknown state: {}", state))?;

    let mut handle = start(url)?;
    handle.send(Event::PageLoaded {
        query: String::new(),
    })?;
    let loaded = handle.settle().await?;
    if loaded.data != DataStatus::Ready {
        bail!("{}", loaded.status.text);
    }

    handle.send(Event::StateSelected {
        abbr: info.abbr.to_string(),
    })?;
    let selected = handle.settle().await?;
    if !selected.reps.contains(rep) {
        warn!(state = info.abbr, rep, "Representative is not listed for this state");
    }

    handle.send(Event::RepSelected {
        name: rep.to_string(),
    })?;
    handle.send(Event::EmailChanged {
        email: email.to_string(),
    })?;
    handle.send(Event::SubmitRequested)?;
    let done = handle.settle().await?;

    match done.status.tone {
        Tone::Success => {
            println!("✅ {}", done.status.text);
            Ok(())
        }
        _ => bail!("{}", done.status.text),
    }
}
