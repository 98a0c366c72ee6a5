//! Interactive analysis surface: handlers + HTML rendering.

pub mod handlers;
pub mod pages;
