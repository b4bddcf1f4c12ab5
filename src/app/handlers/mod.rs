//! Feature-Handler: dünne Fassaden zwischen Controller und Use-Cases.

pub mod editing;
pub mod selection;
pub mod session;
pub mod timeline;
pub mod view;
