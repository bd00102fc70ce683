pub mod client_detail;
