/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
/// Authentication request and response models
pub mod auth;
/// Authenticated HTTP transport with single refresh-and-retry
pub mod http;
/// Request options, payloads and file parts
pub mod requests;
/// Generic response models: error bodies, pages, counters
pub mod responses;
