// Links the externally compiled data-parallel kernels when the `ispc` feature
// is enabled. Nothing to do for the reference backend.
fn main() {
    println!("cargo:rerun-if-env-changed=KPLUTL_ISPC_LIB_DIR");
    println!("cargo:rerun-if-env-changed=KPLUTL_ISPC_LIB");

    if std::env::var_os("CARGO_FEATURE_ISPC").is_none() {
        return;
    }

    if let Some(dir) = std::env::var_os("KPLUTL_ISPC_LIB_DIR") {
        println!(
            "cargo:rustc-link-search=native={}",
            std::path::Path::new(&dir).display()
        );
    } else {
        println!(
            "cargo:warning=KPLUTL_ISPC_LIB_DIR is not set, relying on the default linker search \
             path for the ispc kernels"
        );
    }

    let lib = std::env::var("KPLUTL_ISPC_LIB").unwrap_or_else(|_| String::from("kplutl_ispc"));
    println!("cargo:rustc-link-lib=static={lib}");
}
