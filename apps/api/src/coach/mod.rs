// Mock AI career-coach services.
// Every function here simulates an AI round trip: a fixed tokio::time delay
// followed by canned or template text. No real inference happens anywhere
// in this crate.

pub mod cover_letter;
pub mod handlers;
pub mod recommend;
pub mod resume_review;
pub mod roadmap;
