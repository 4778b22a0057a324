//! Plain data types shared by the high-speed rail LCA model and its command line front end.

pub mod columns;
pub mod electricity;
pub mod file_formats;
pub mod params;
pub mod phase;
pub mod records;
