//! Build script for statline-firmware
//!
//! embassy-stm32 generates memory.x for the selected chip (`memory-x`
//! feature); this only passes the linker scripts.

fn main() {
    setup_linker();
}

/// Link against cortex-m-rt and defmt
fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    if std::env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
