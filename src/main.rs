#![allow(non_snake_case)]

mod client;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    dioxus::launch(client::App);
}
