pub mod bedrock_service;
pub mod client;
pub mod response;

#[cfg(test)]
pub mod testing;
