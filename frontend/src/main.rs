fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Some(performance) = web_sys::window().and_then(|window| window.performance()) {
        log::info!("boot at {:.1}ms", performance.now());
    }

    tasky_frontend::mount();
}
