pub mod draft;
pub mod review;
