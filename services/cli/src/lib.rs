mod cli;
mod commands;
mod prompt;

use homematch::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
