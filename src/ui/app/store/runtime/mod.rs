pub mod dataset;
pub mod review;


use super::super::ReviewApp;
use super::command::Command;

pub fn run(app: &mut ReviewApp, command: Command) {
    match command {
        Command::ReadDatasetFile { path } => dataset::read_dataset_file(app, path),
        Command::UploadReview { entry, record } => review::upload_review(app, *entry, record),
    }
}
