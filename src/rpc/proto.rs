//! Wire types and generated stubs for the `link.Links` gRPC service.
//!
//! ```protobuf
//! package link;
//!
//! service Links {
//!   rpc CreateShortLink (OriginalLink) returns (ShortLink);
//!   rpc GetOriginalLink (ShortLink) returns (OriginalLink);
//! }
//!
//! message OriginalLink { string original_link = 1; }
//! message ShortLink    { string short_link = 1; }
//! ```

#[derive(Clone, PartialEq, prost::Message)]
pub struct OriginalLink {
    #[prost(string, tag = "1")]
    pub original_link: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShortLink {
    #[prost(string, tag = "1")]
    pub short_link: String,
}

include!(concat!(env!("OUT_DIR"), "/link.Links.rs"));
