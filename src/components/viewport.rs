use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Widths below this are laid out as a phone.
pub const MOBILE_BREAKPOINT_PX: f64 = 640.0;

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

#[cfg(target_arch = "wasm32")]
fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Tracks whether the viewport is phone-sized, updating on resize.
pub fn use_is_mobile() -> Signal<bool> {
    #[cfg(target_arch = "wasm32")]
    {
        let mut is_mobile = use_signal(|| window_width().is_some_and(is_mobile_width));
        use_hook(move || {
            let Some(win) = web_sys::window() else {
                return;
            };
            let runtime = Runtime::current();
            let on_resize = Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                if let Some(width) = window_width() {
                    let mobile = is_mobile_width(width);
                    if is_mobile() != mobile {
                        is_mobile.set(mobile);
                    }
                }
            }) as Box<dyn FnMut()>);
            let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
            on_resize.forget();
        });
        is_mobile
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use_signal(|| false)
    }
}
