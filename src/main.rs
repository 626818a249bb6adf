use std::{env, path::PathBuf, time::Duration};

use anyhow::Result;
use log::info;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    sync::broadcast::error::RecvError,
};

use serenity::{
    breathing::{BreathingController, BreathingEvent, BreathingState},
    companion::CompanionClient,
    settings::SettingsStore,
    Conversation,
};

const SETTINGS_PATH_ENV: &str = "SERENITY_SETTINGS_PATH";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Serenity starting up...");

    let mode = env::args().nth(1).unwrap_or_else(|| "breathe".to_string());
    match mode.as_str() {
        "breathe" => run_breathing_session().await,
        "companion" => run_companion_chat().await,
        other => {
            eprintln!("unknown mode '{other}'; expected 'breathe' or 'companion'");
            std::process::exit(2);
        }
    }
}

/// Run the 4-4-4 breathing exercise in the terminal until Ctrl-C.
async fn run_breathing_session() -> Result<()> {
    let controller = BreathingController::with_tick_interval(Duration::from_secs(1));
    let mut events = controller.subscribe();

    println!("4-4-4 breathing. Inhale 4s, hold 4s, exhale 4s. Ctrl-C to finish.\n");
    controller.start().await?;

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(BreathingEvent::Tick(state)) => render_tick(&state),
                Ok(BreathingEvent::CycleCompleted(state)) => {
                    println!("  breath {} complete", state.completed_breaths);
                }
                Err(RecvError::Lagged(skipped)) => {
                    info!("display fell behind, skipped {skipped} updates");
                }
                Err(RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                let final_state = controller.stop().await?;
                println!(
                    "\nSession over: {} full breaths. Be well.",
                    final_state.completed_breaths
                );
                break;
            }
        }
    }

    Ok(())
}

fn render_tick(state: &BreathingState) {
    let filled = (state.progress / 25) as usize;
    let bar: String = "#".repeat(filled) + &"-".repeat(4 - filled);
    println!("{:>6} [{bar}] {:>3}%", state.phase.label(), state.progress);
}

/// Line-based companion chat. Uses the generative endpoint when an API key
/// is configured, canned supportive replies otherwise.
async fn run_companion_chat() -> Result<()> {
    let settings = SettingsStore::new(settings_path())?;
    let client = CompanionClient::from_env();
    let mut conversation = Conversation::new();

    println!("{}\n(type 'quit' to leave)\n", conversation.last_reply().unwrap_or_default());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"you> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("quit") {
            break;
        }

        conversation.push_user(text);
        let system_prompt = settings.companion().system_prompt;
        let reply = client
            .generate(conversation.outbound_history(), Some(&system_prompt))
            .await?;
        conversation.push_model(reply.clone());

        println!("companion> {reply}\n");
    }

    println!("Take care of yourself.");
    Ok(())
}

fn settings_path() -> PathBuf {
    env::var(SETTINGS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("serenity-settings.json"))
}
