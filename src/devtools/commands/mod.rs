//! Pure command logic. Nothing in here touches stdin, stdout or the clipboard;
//! the [`api`](crate::api) facade feeds bytes in and takes bytes out.

pub mod base64;
pub mod uuid;
