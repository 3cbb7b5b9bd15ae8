/// Application layer - Use cases and DTOs
///
/// This layer validates incoming requests, drives the domain entities and
/// coordinates with storage through the outbound ports.
pub mod dto;
pub mod use_cases;
