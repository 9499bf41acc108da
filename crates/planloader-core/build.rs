//! Resolves the module version at build time.
//!
//! `VERSION_INFO`, when set, becomes the version string verbatim (an empty
//! value included). Otherwise the version is `dev`.

const FALLBACK_VERSION: &str = "dev";

fn main() {
    println!("cargo:rerun-if-env-changed=VERSION_INFO");
    println!("cargo:rerun-if-changed=build.rs");

    let (version, from_env) = match std::env::var("VERSION_INFO") {
        Ok(value) => (value, true),
        _ => (FALLBACK_VERSION.to_string(), false),
    };

    println!("cargo:rustc-env=PLANLOADER_VERSION={version}");
    println!("cargo:rustc-env=PLANLOADER_VERSION_FROM_ENV={from_env}");
}
