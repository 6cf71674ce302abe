/// Installs a panic hook that reports panics through `tracing` before
/// running the default hook, so that panics end up in structured logs.
pub fn install() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("thread panicked: {info}");
        default_hook(info);
    }));
}
