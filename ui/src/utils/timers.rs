/// Cooperative delay: browser timer on wasm32, tokio elsewhere so native
/// test runs never touch JS bindings.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

// Native tests cover the tokio branch via the retry tests; this covers the
// browser timer branch under wasm-pack.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_sleep_ms_resolves_on_the_browser_timer() {
        super::sleep_ms(1).await;
    }
}
