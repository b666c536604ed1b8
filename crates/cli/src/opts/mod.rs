mod artifact;
mod rpc;

pub use artifact::*;
pub use rpc::*;
