pub mod web_page;
