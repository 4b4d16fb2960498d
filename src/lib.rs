//! JPPF Site - the project web site, server-rendered
//!
//! This crate serves the JPPF project pages: the home page with the latest
//! news item, the quotes page, the news archive and the grid-failover sample
//! description, all sharing one navigation chrome.

pub mod config;
pub mod db;
pub mod nav;
pub mod routes;
