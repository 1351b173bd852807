use std::io::{BufRead, Write};

use st_core::{Scene, StoryError, ThreadType};
use st_engine::{StoryEngine, TurnInput, TurnOutcome};

use crate::map_cli_io;

/// Drives the engine over line-oriented I/O. Reader and writer are injected
/// so scripted sessions can run in tests.
pub(crate) fn run_player(
    engine: &StoryEngine,
    start_id: &str,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<i32, StoryError> {
    let mut current = engine
        .graph()
        .get(start_id)
        .ok_or_else(|| {
            StoryError::new(
                "SCENE_NOT_FOUND",
                format!("start scene '{}' does not exist", start_id),
            )
        })?
        .clone();

    loop {
        writeln!(writer).map_err(map_cli_io)?;
        writeln!(writer, "{}", current.text).map_err(map_cli_io)?;

        let Some(input) = read_turn_input(&current, reader, writer)? else {
            writeln!(writer, "[session closed]").map_err(map_cli_io)?;
            return Ok(0);
        };

        match engine.resolve_turn(&input) {
            Ok(TurnOutcome::Advance { scene, feedback }) => {
                tracing::debug!(from = %current.id, to = %scene.id, "turn resolved");
                if !feedback.is_empty() {
                    writeln!(writer, "{}", feedback).map_err(map_cli_io)?;
                }
                current = scene;
            }
            Ok(TurnOutcome::Retry { scene, feedback }) => {
                writeln!(writer, "{}", feedback).map_err(map_cli_io)?;
                current = scene;
            }
            Ok(TurnOutcome::End) => {
                writeln!(writer).map_err(map_cli_io)?;
                writeln!(writer, "[THE END]").map_err(map_cli_io)?;
                return Ok(0);
            }
            Err(error) if error.code == "INPUT_INVALID" => {
                // Recoverable at this boundary: tell the player and
                // re-present the same scene.
                writeln!(writer, "{}", error.message).map_err(map_cli_io)?;
            }
            Err(error) => return Err(error),
        }
    }
}

fn read_turn_input(
    scene: &Scene,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<Option<TurnInput>, StoryError> {
    match scene.thread_type {
        ThreadType::Multi => {
            for (index, choice) in scene.choices.iter().enumerate() {
                writeln!(writer, "  [{}] {}", index, choice.text).map_err(map_cli_io)?;
            }
            loop {
                let Some(raw) = prompt_line("> ", reader, writer)? else {
                    return Ok(None);
                };
                match raw.trim().parse::<usize>() {
                    Ok(index) => return Ok(Some(TurnInput::choice(scene.id.clone(), index))),
                    Err(_) => {
                        writeln!(writer, "Invalid choice index: {}", raw).map_err(map_cli_io)?;
                    }
                }
            }
        }
        ThreadType::Open => {
            let Some(raw) = prompt_line("> ", reader, writer)? else {
                return Ok(None);
            };
            Ok(Some(TurnInput::text(scene.id.clone(), raw)))
        }
        ThreadType::Affirmative | ThreadType::Finisher => {
            if prompt_line("(press Enter to continue) ", reader, writer)?.is_none() {
                return Ok(None);
            }
            Ok(Some(TurnInput::advance(scene.id.clone())))
        }
    }
}

fn prompt_line(
    prefix: &str,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<Option<String>, StoryError> {
    write!(writer, "{}", prefix).map_err(map_cli_io)?;
    writer.flush().map_err(map_cli_io)?;

    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(map_cli_io)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
