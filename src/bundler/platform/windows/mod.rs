//! Windows installer tooling: Inno Setup script generation and compilation,
//! plus Authenticode signing of the result.

pub mod inno;
pub mod sign;
