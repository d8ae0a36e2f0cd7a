use std::fs;
use std::path::Path;

// Embeds the built frontend into the server binary: whatever trunk produced
// in ../frontend/dist is copied under static/ where include_dir! picks it up.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new()
                .overwrite(true)
                .copy_inside(true),
        )
        .unwrap();
    } else {
        // No frontend build present: keep an empty tree so include_dir!
        // still compiles and the server runs API-only.
        fs::create_dir_all(out_dir.join("dist")).unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
