pub mod extractors;
pub mod handlers;
pub mod passwords;
pub mod requests;
pub mod responses;
pub mod services;
pub mod tokens;
#[cfg(test)]
pub mod tests;
