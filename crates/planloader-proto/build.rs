use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use protoc-bin-vendored to avoid needing protoc installed
    std::env::set_var(
        "PROTOC",
        protoc_bin_vendored::protoc_bin_path().expect("vendored protoc for this host"),
    );

    let proto_dir = PathBuf::from("proto");
    let protos = [proto_dir.join("planloader/v1/module.proto")];

    let mut config = prost_build::Config::new();
    config.enable_type_names();
    config.type_attribute(".", "#[derive(serde::Serialize, serde::Deserialize)]");
    config.type_attribute(".", "#[serde(rename_all = \"snake_case\")]");
    // proto3 JSON omits default-valued fields
    config.message_attribute(".", "#[serde(default)]");

    config.compile_protos(&protos, &[&proto_dir])?;

    for proto in &protos {
        println!("cargo:rerun-if-changed={}", proto.display());
    }
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
