use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Bundled protoc; no system install required.
    std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    println!("cargo:rerun-if-changed=proto/auth.proto");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    tonic_build::configure()
        .file_descriptor_set_path(out_dir.join("auth_descriptor.bin"))
        .compile_protos(&["proto/auth.proto"], &["proto"])?;
    Ok(())
}
