//! Build script for link-shortener
//!
//! Generates the gRPC client and server stubs for the `link.Links` service.
//! Message types are hand-written prost structs in `src/rpc/proto.rs`, so no
//! protobuf compiler is required.

use tonic_build::manual::{Builder, Method, Service};

fn main() {
    let create_short_link = Method::builder()
        .name("create_short_link")
        .route_name("CreateShortLink")
        .input_type("crate::rpc::proto::OriginalLink")
        .output_type("crate::rpc::proto::ShortLink")
        .codec_path("tonic::codec::ProstCodec")
        .build();

    let get_original_link = Method::builder()
        .name("get_original_link")
        .route_name("GetOriginalLink")
        .input_type("crate::rpc::proto::ShortLink")
        .output_type("crate::rpc::proto::OriginalLink")
        .codec_path("tonic::codec::ProstCodec")
        .build();

    let links = Service::builder()
        .name("Links")
        .package("link")
        .method(create_short_link)
        .method(get_original_link)
        .build();

    Builder::new().compile(&[links]);

    println!("cargo:rerun-if-changed=build.rs");
}
