/// Console-backed logger with per-component tags so related messages can be
/// filtered together in the browser devtools.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        gloo::console::debug!(Self::tag(component), message.to_string());
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(Self::tag(component), message.to_string());
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(Self::tag(component), message.to_string());
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(Self::tag(component), message.to_string());
    }

    fn tag(component: &str) -> String {
        format!("[{}]", component)
    }
}
