//! Bank branch registry adapters

pub mod razorpay;

pub use razorpay::RazorpayBranchRegistry;
