pub type Request = hyper::Request<hyper::Body>;
pub type Response = hyper::Response<hyper::Body>;

pub mod error;

pub mod uri;
pub mod header;

pub mod response;

#[cfg(test)]
pub mod recorder;
