//! Browser gallery mounting the `sample_ui` components in their canonical scenarios.

mod scenario;
mod web_app;

pub use scenario::{scenario_from_query, GalleryScenario, ScenarioError};
pub use web_app::{GalleryApp, ScenarioView};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <GalleryApp /> })
}
