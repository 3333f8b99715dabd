use agency_frontend::{config, Landing};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    yew::Renderer::<Landing>::new().render();
}
