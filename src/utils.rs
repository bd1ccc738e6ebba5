pub mod aws;
pub mod pg;
