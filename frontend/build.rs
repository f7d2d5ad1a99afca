use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

const SONGS_DIR: &str = "assets/twister-songs";

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let songs_dir = manifest_dir.join(SONGS_DIR);
    println!("cargo:rerun-if-changed={}", songs_dir.display());

    let tracks = collect_tracks(&songs_dir);

    let mut out = String::new();
    writeln!(out, "pub const TRACK_FILES: &[&str] = &[").unwrap();
    for track in &tracks {
        writeln!(out, "    {:?},", track).unwrap();
    }
    writeln!(out, "];").unwrap();

    let out_path = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR")).join("tracks.rs");
    fs::write(&out_path, out).unwrap_or_else(|err| {
        panic!("failed to write track list to {}: {err}", out_path.display())
    });
}

/// File names of every `.mp3` in the songs folder, sorted so the generated
/// list is stable between builds. A missing folder yields no tracks.
fn collect_tracks(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut tracks: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"))
        })
        .filter_map(|path| path.file_name().and_then(|name| name.to_str()).map(str::to_string))
        .collect();
    tracks.sort();
    tracks
}
