fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_file = "../../proto/storage.proto";
    let proto_dir = "../../proto";

    println!("cargo:rerun-if-changed={}", proto_file);
    println!("cargo:rerun-if-env-changed=PROTOC");

    // The generated code is checked in; only regenerate when a protoc is
    // explicitly provided.
    if std::env::var_os("PROTOC").is_none() || !std::path::Path::new(proto_file).exists() {
        return Ok(());
    }

    std::fs::create_dir_all("src/generated")?;

    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .out_dir("src/generated")
        .compile(&[proto_file], &[proto_dir])?;

    Ok(())
}
