//! build script to generate .rs files from .proto definitions

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_file = "proto/svc-agenda-grpc.proto";

    tonic_build::configure()
        .build_client(true)
        .build_server(true)
        .compile(&[proto_file], &["proto"])?;

    println!("cargo:rerun-if-changed={}", proto_file);

    Ok(())
}
