use std::path::Path;

use povlens_lib::fetch::{load_decomposition_file, FetchLifecycle, FetchState};
use povlens_lib::render::render_state;

const DEFAULT_URL: &str = "http://localhost:8080/decomposition.json";

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut lifecycle = FetchLifecycle::new();

    if args.first().map(String::as_str) == Some("--file") {
        match args.get(1) {
            Some(path) => lifecycle.resolve(load_decomposition_file(Path::new(path))),
            None => {
                eprintln!("Usage: povlens [URL | --file PATH]");
                std::process::exit(2);
            }
        }
    } else {
        let url = args
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let http = reqwest::Client::new();
        lifecycle.load(&http, &url).await;
    }

    print!("{}", render_state(lifecycle.state()));
    if let FetchState::Error(message) = lifecycle.state() {
        log::error!("Load failed: {message}");
        std::process::exit(1);
    }
}
