pub mod interceptor;
pub mod operation;

pub use interceptor::Interceptor;
pub use operation::Operation;
