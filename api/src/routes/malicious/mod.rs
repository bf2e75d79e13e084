pub mod malicious_text_route;
pub mod malicious_url_route;
pub mod url_request;
