mod completion;
pub use completion::CompletionPolicy;
