pub mod api;

pub use api::HttpChatApi;
