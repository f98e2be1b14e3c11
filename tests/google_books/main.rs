#[path = "../utils/mod.rs"]
mod utils;

mod mapper_test;
mod models_test;
