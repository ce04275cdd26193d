use log::error;
use std::panic;

/// Install the panic hook used by the binary.
///
/// Debug builds get full backtraces from better-panic; release builds get
/// human-panic's crash report. Either way the panic is also written to the log.
pub fn initialize_panic_handler() {
    if cfg!(debug_assertions) {
        better_panic::install();
    } else {
        human_panic::setup_panic!();
    }

    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        error!("Panic: {panic_info}");
        log::logger().flush();

        default_hook(panic_info);
    }));
}
