fn main() {
    println!("cargo:rerun-if-changed=src/c/vsnprintf.c");

    cc::Build::new()
        .file("src/c/vsnprintf.c")
        .warnings(true)
        .compile("ffi_vsnprintf");
}
