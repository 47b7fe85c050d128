#![allow(warnings)]
//! Coopera Frontend Entry Point

mod logger;
mod session;
mod context;
mod store;
mod hooks;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
