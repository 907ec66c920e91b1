// Tessera library entry point

pub mod codec;
pub mod internal;
