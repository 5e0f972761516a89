pub mod requester;


pub use requester::ConnectionRequester;
