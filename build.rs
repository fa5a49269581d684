use chrono::Datelike;

fn main() {
    // Footer copyright is stamped at build time so SSR and hydration agree
    let now = chrono::Utc::now();
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
