//! Wire types for the SLAM relay gRPC API.
//!
//! The protobuf schema lives in [`proto/slam.proto`]; the Rust in
//! `src/ivm.slam.rs` is generated from it with `tonic-build` and committed to
//! the tree, so building this crate does not require `protoc`. When the
//! schema changes, regenerate the file and commit the result — field numbers
//! are frozen.
//!
//! [`proto/slam.proto`]: https://github.com/ivm-slam/slamrelay/blob/main/crates/sr_protos/proto/slam.proto
//!
//! Conversions between the wire types and the native model in [`sr_types`]
//! live in [`ext`].

pub mod ivm {
    pub mod slam {
        include!("ivm.slam.rs");
    }
}

pub mod ext;
