use std::{env, process::Command};

use color_eyre::Result;
use reqwest::Url;

const BOARD_WIDTH: u64 = 11;
const BOARD_HEIGHT: u64 = 11;
const DEFAULT_PORT: u16 = 6502;

enum GameMode {
    Solo,
    Standard,
}

impl GameMode {
    const fn as_arg(&self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Standard => "standard",
        }
    }
}

struct Snake {
    name: String,
    url:  Url,
}

fn make_play_command(mode: &GameMode, snakes: &[Snake]) -> Command {
    let mut cmd = Command::new("battlesnake");
    cmd.arg("play");

    cmd.arg("--width");
    cmd.arg(BOARD_WIDTH.to_string());
    cmd.arg("--height");
    cmd.arg(BOARD_HEIGHT.to_string());

    for snake in snakes {
        cmd.arg("--name");
        cmd.arg(&snake.name);

        cmd.arg("--url");
        cmd.arg(snake.url.to_string());
    }

    cmd.arg("--gametype");
    cmd.arg(mode.as_arg());

    cmd.arg("--browser");

    cmd
}

/// Runs a local game against our own server via the official battlesnake
/// CLI. Any extra URLs on the command line join as opponents and switch the
/// game from solo to standard mode.
fn main() -> Result<()> {
    color_eyre::install()?;

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let mut snakes = vec![Snake {
        name: "🌼 wallflower".to_owned(),
        url:  format!("http://localhost:{port}").parse()?,
    }];

    for (index, opponent) in env::args().skip(1).enumerate() {
        snakes.push(Snake {
            name: format!("opponent {}", index + 1),
            url:  opponent.parse()?,
        });
    }

    let mode = if snakes.len() > 1 {
        GameMode::Standard
    } else {
        GameMode::Solo
    };

    make_play_command(&mode, &snakes).status()?;

    Ok(())
}
