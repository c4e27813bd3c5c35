pub mod bench_client;

pub use bench_client::{BenchClient, HttpReply, SubmissionRequest, Submitter};
