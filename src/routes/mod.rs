pub mod abundance;
pub mod angler;
pub mod catch_summary;
pub mod diet;
pub mod export;
pub mod landing;
pub mod length_frequency;
pub mod report;
pub mod summary;
