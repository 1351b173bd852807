use std::ffi::OsString;
use std::path::Path;

use clap::Parser;
use st_core::StoryError;
use st_engine::StoryEngine;
use st_loader::load_story_from_path;

mod cli_args;
mod error_map;
mod player;

pub(crate) use cli_args::{Cli, Command, PlayArgs, ValidateArgs};
pub(crate) use error_map::{emit_error, map_cli_io};
pub(crate) use player::run_player;

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, StoryError> {
    match cli.command {
        Command::Play(args) => run_play(args),
        Command::Validate(args) => run_validate(args),
    }
}

fn run_play(args: PlayArgs) -> Result<i32, StoryError> {
    let graph = load_story_from_path(Path::new(&args.story))?;
    tracing::info!(scenes = graph.len(), story = %args.story, "scene graph loaded");

    let start_id = match args.start {
        Some(start) => start,
        None => first_scene_id(&graph)?,
    };

    let engine = StoryEngine::new(graph);
    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let mut writer = std::io::stdout();
    run_player(&engine, &start_id, &mut reader, &mut writer)
}

fn run_validate(args: ValidateArgs) -> Result<i32, StoryError> {
    let graph = load_story_from_path(Path::new(&args.story))?;
    println!("scene graph validated: {} scenes", graph.len());
    Ok(0)
}

fn first_scene_id(graph: &st_core::SceneGraph) -> Result<String, StoryError> {
    graph
        .scenes()
        .first()
        .map(|scene| scene.id.clone())
        .ok_or_else(|| StoryError::new("DOC_EMPTY", "story document contains no scenes"))
}
