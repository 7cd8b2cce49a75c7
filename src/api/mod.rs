pub mod chat;
pub mod completion;
pub mod models;
pub mod response;

pub use chat::ChatApi;
pub use completion::CompletionClient;
pub use response::extract_completion_text;
