// Packages the deployable site: wasm-pack for wasm targets, then static/ -> dist/.
use fs_extra::dir::{self, CopyOptions};
use std::process::Command;
use std::{env, fs, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=static");

    // Only run the heavy wasm-pack build when targeting wasm32.
    let target = env::var("TARGET").unwrap_or_default();
    if target == "wasm32-unknown-unknown" {
        match Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web"])
            .status()
        {
            Ok(st) if !st.success() => println!("cargo:warning=wasm-pack build failed"),
            Ok(_) => {}
            Err(_) => println!("cargo:warning=wasm-pack not installed - skipping"),
        }
    }

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let mut opts = CopyOptions::new();
        opts.content_only = true;
        if let Err(err) = dir::copy(static_dir, out_dir, &opts) {
            println!("cargo:warning=failed to copy static assets: {err}");
        }
    }
}
