use st_core::StoryError;

pub(crate) fn emit_error(error: StoryError) -> i32 {
    eprintln!("error[{}]: {}", error.code, error.message);
    1
}

pub(crate) fn map_cli_io(error: std::io::Error) -> StoryError {
    StoryError::new("CLI_IO", error.to_string())
}
