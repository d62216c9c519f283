pub mod handlers;
pub mod responses;
#[cfg(test)]
pub mod tests;
