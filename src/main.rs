//! Host-side helper: `cargo run` compiles the WASM bundle and serves the
//! static site locally so the backdrops can be eyeballed in a browser.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::process::{Command, Stdio};
    use std::{thread, time::Duration};

    env_logger::init();

    // 1. Compile the wasm bundle into static/pkg via wasm-pack.
    log::info!("building WASM pkg ...");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            log::error!("wasm-pack finished with errors");
            std::process::exit(1);
        }
        Err(_) => {
            log::warn!("wasm-pack not found in PATH; the site may serve stale artifacts");
        }
    }

    // 2. Serve `static/` on 8000.
    log::info!("serving http://127.0.0.1:8000 ...");
    let _server = Command::new("python3")
        .args(["-m", "http.server", "8000", "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start http server");

    // Keep process alive while the server child runs.
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}

// The binary target is still built when targeting wasm32; give it nothing to do.
#[cfg(target_arch = "wasm32")]
fn main() {}
