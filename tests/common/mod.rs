#![allow(dead_code)]

use axum_test::TestServer;
use linkmap::domain::entities::Mapping;
use linkmap::routes::app_router;
use linkmap::state::AppState;
use std::fs;
use std::path::{Path, PathBuf};

pub fn create_test_mapping(pairs: &[(&str, &str)]) -> Mapping {
    pairs.iter().copied().collect()
}

pub fn create_test_state(pairs: &[(&str, &str)]) -> AppState {
    AppState::new(create_test_mapping(pairs))
}

pub fn create_test_server(pairs: &[(&str, &str)]) -> TestServer {
    TestServer::new(app_router(create_test_state(pairs))).unwrap()
}

pub fn write_mapping_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.yml");
    fs::write(&path, contents).unwrap();
    path
}
