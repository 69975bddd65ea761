#![doc = "The `taskpad` library crate."]
#![doc = ""]
#![doc = "A minimal multi-user task list service: accounts with hashed passwords"]
#![doc = "and per-user titled, categorized, completable tasks, exposed over a"]
#![doc = "small HTTP/JSON surface backed by SQLite. The binary (`main.rs`) wires"]
#![doc = "these modules into the running server."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
