//! Build script for mini-car-game-simulator
//!
//! On Windows, links against the SDL2 import library in `vendor/sdl2/` and
//! copies `SDL2.dll` next to the simulator executable. Other platforms use the
//! system SDL2 and skip this entirely.

use std::path::{Path, PathBuf};
use std::{env, fs};

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        return;
    };
    let vendor_sdl2 = Path::new(&manifest_dir).join("..").join("vendor").join("sdl2");
    println!("cargo:rerun-if-changed={}", vendor_sdl2.display());

    if !vendor_sdl2.exists() {
        println!("cargo:warning=SDL2 not found at {}", vendor_sdl2.display());
        println!("cargo:warning=Put SDL2.lib and SDL2.dll in vendor/sdl2/ to build on Windows");
        return;
    }

    println!("cargo:rustc-link-search=native={}", vendor_sdl2.display());

    // OUT_DIR is target/<profile>/build/<pkg>-<hash>/out; the exe lives in target/<profile>
    let Some(profile_dir) = env::var("OUT_DIR").ok().and_then(|out| profile_dir(&PathBuf::from(out))) else {
        return;
    };

    let dll_src = vendor_sdl2.join("SDL2.dll");
    let dll_dst = profile_dir.join("SDL2.dll");
    if dll_src.exists()
        && !dll_dst.exists()
        && let Err(e) = fs::copy(&dll_src, &dll_dst)
    {
        println!("cargo:warning=Failed to copy SDL2.dll: {e}");
    }
}

fn profile_dir(out_dir: &Path) -> Option<PathBuf> {
    out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
        .map(Path::to_path_buf)
}
